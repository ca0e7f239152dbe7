// Server module entry
// Listener setup and the accept loop; one spawned task per connection

pub mod connection;
pub mod listener;

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::AppState;
use crate::logger;

pub use listener::bind_listener;

/// Run the accept loop for the lifetime of the process.
///
/// There is no drain or restart path: the loop ends only when the process
/// is terminated externally.
pub async fn run(
    listener: TcpListener,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                connection::accept_connection(stream, peer_addr, &state, &active_connections);
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
