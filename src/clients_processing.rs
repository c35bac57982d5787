use failure::Error;

use tokio::net::TcpStream;
use tokio_util::codec::{Framed, LinesCodec};

use futures::StreamExt;
use futures_util::sink::SinkExt;

use crate::classify::classify;
use crate::command::Command;
use crate::network::SocialNetwork;
use crate::suggestions::suggest;
use crate::Net;

/// Read commands line by line from a client socket and answer each one.
/// Malformed lines get an `ERR` reply and keep the connection open;
/// socket errors close it.
pub async fn process_client(state: Net, stream: TcpStream) -> Result<(), Error> {
    let mut lines = Framed::new(stream, LinesCodec::new());
    while let Some(line) = lines.next().await {
        let line = line?;
        let reply = match Command::parse(&line) {
            Ok(command) => {
                let mut network = state.lock().await;
                apply(&mut network, command)?
            }
            Err(error) => {
                log::warn!("rejected line {:?}: {}", line, error);
                format!("ERR {}", error)
            }
        };
        lines.send(reply).await?;
    }
    Ok(())
}

/// Run one command against the network and build the reply line.
/// Mutations answer `OK`/`ERR`, queries answer JSON.
pub fn apply(network: &mut SocialNetwork, command: Command) -> Result<String, Error> {
    let reply = match command {
        Command::AddUser { username } => {
            // the core stores names verbatim, so normalize here
            let username = username.trim();
            if username.is_empty() {
                "ERR empty username".to_string()
            } else {
                network.add_user(username);
                "OK".to_string()
            }
        }
        Command::DeleteUser { username } => {
            network.delete_user(&username);
            "OK".to_string()
        }
        Command::Follow { from, to } => ok_or_err(network.follow(&from, &to)),
        Command::Unfollow { from, to } => ok_or_err(network.unfollow(&from, &to)),
        Command::SendMessage { from, to, content } => {
            if content.is_empty() {
                "ERR empty message".to_string()
            } else {
                ok_or_err(network.send_message(&from, &to, &content))
            }
        }
        Command::Conversation { user, other } => {
            serde_json::to_string(&network.conversation(&user, &other))?
        }
        Command::Partners { username } => {
            let mut partners: Vec<String> =
                network.conversation_partners(&username).into_iter().collect();
            partners.sort();
            serde_json::to_string(&partners)?
        }
        Command::RequestBlock { from, to } => ok_or_err(network.request_block(&from, &to)),
        Command::FinalizeBlock { from, to } => ok_or_err(network.finalize_block(&from, &to)),
        Command::Unblock { from, to } => ok_or_err(network.unblock(&from, &to)),
        Command::IsBlocked { from, to } => network.is_blocked(&from, &to).to_string(),
        Command::Exists { username } => network.contains(&username).to_string(),
        Command::Users => serde_json::to_string(&network.users())?,
        Command::Followers { username } => {
            let mut followers: Vec<String> = network.followers(&username).into_iter().collect();
            followers.sort();
            serde_json::to_string(&followers)?
        }
        Command::Suggest { username, depth } => {
            let mut suggested: Vec<String> =
                suggest(network, &username, depth).into_iter().collect();
            suggested.sort();
            serde_json::to_string(&suggested)?
        }
        Command::Graph => serde_json::to_string(&classify(network))?,
    };
    Ok(reply)
}

fn ok_or_err(success: bool) -> String {
    if success {
        "OK".to_string()
    } else {
        "ERR rejected".to_string()
    }
}
