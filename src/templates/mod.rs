pub mod error_page;
pub mod pages;

// Re-exports for convenience
pub use error_page::render_html_error;
