use std::sync::Arc;

use log::LevelFilter;

use failure::Error;

use tokio::net::TcpListener;
use tokio::sync::Mutex;

use bubble::clients_processing::process_client;
use bubble::network::SocialNetwork;
use bubble::{Net, LISTEN_ADDR};

/// Same starting population the web demo used.
fn seed_demo_data(network: &mut SocialNetwork) {
    for user in &["Alice", "Bob", "Charlie", "David", "Eve"] {
        network.add_user(user);
    }
    network.follow("Alice", "Bob");
    network.follow("Alice", "Charlie");
    network.follow("Bob", "David");
    network.follow("Charlie", "David");
    network.follow("David", "Eve");
    network.follow("Eve", "Alice");
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let mut network = SocialNetwork::new();
    seed_demo_data(&mut network);
    let shared_state: Net = Arc::new(Mutex::new(network));

    let listener = TcpListener::bind(LISTEN_ADDR).await?;
    log::info!("listening on {}", LISTEN_ADDR);
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let state = Arc::clone(&shared_state);
                // asynchronously process clients
                tokio::spawn(async move {
                    log::info!("connected client {}", addr);
                    if let Err(error) = process_client(state, stream).await {
                        log::error!("Error during processing client {}: {}", addr, error);
                    }
                    log::info!("client {} connection closed", addr);
                });
            }
            Err(error) => {
                log::error!("Failed to accept client connection: {}", error);
            }
        }
    }
}
