mod negotiation_tests;
mod normalize_tests;
