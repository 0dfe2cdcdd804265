use crate::config::RuntimeMode;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod config;
mod errors;
mod negotiation;
mod normalize;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let mode = RuntimeMode::from_env();

    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr} ({mode:?} mode)");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| responses::dispatch(req, mode, handle));

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
