/*!
In-memory social network core: users, directed follows, direct messages
with a two-phase blocking workflow, friend suggestions and edge
classification for an external graph renderer.

The binary wraps it in a line-based TCP interface; one command per line,
one reply per command.
*/

use std::sync::Arc;

use tokio::sync::Mutex;

use network::SocialNetwork;

/// Edge classification for the renderer
pub mod classify;
/// Client connections and command dispatch
pub mod clients_processing;
/// Wire commands
pub mod command;
/// Message and block request records
pub mod message;
/// Core graph, messaging and blocking state
pub mod network;
/// Friend-of-friend suggestions
pub mod suggestions;

/// Shared network state, one lock around the whole aggregate
pub type Net = Arc<Mutex<SocialNetwork>>;

/// BFS depth used when a SUGGEST command does not name one
pub const DEFAULT_SUGGEST_DEPTH: usize = 2;

/// Where the binary listens for clients
pub const LISTEN_ADDR: &str = "127.0.0.1:9990";
