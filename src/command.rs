use std::fmt;

use failure::{bail, Error};

use crate::DEFAULT_SUGGEST_DEPTH;

/// One client request, one line on the wire. Fields are separated with `/`
/// like `FOLLOW/Alice/Bob`; message content is always the last field so it
/// may itself contain `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddUser { username: String },
    DeleteUser { username: String },
    Follow { from: String, to: String },
    Unfollow { from: String, to: String },
    SendMessage { from: String, to: String, content: String },
    Conversation { user: String, other: String },
    Partners { username: String },
    RequestBlock { from: String, to: String },
    FinalizeBlock { from: String, to: String },
    Unblock { from: String, to: String },
    IsBlocked { from: String, to: String },
    Exists { username: String },
    Users,
    Followers { username: String },
    Suggest { username: String, depth: usize },
    Graph,
}

fn one_name(parts: &[&str]) -> Result<String, Error> {
    if parts.len() != 1 || parts[0].is_empty() {
        bail!("expected exactly one username");
    }
    Ok(parts[0].to_string())
}

fn two_names(parts: &[&str]) -> Result<(String, String), Error> {
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        bail!("expected exactly two usernames");
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, Error> {
        let mut split = line.splitn(2, '/');
        let keyword = split.next().unwrap_or("");
        let rest = split.next().unwrap_or("");
        let parts: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };
        let command = match keyword {
            "ADDUSER" => Command::AddUser {
                username: one_name(&parts)?,
            },
            "DELUSER" => Command::DeleteUser {
                username: one_name(&parts)?,
            },
            "FOLLOW" => {
                let (from, to) = two_names(&parts)?;
                Command::Follow { from, to }
            }
            "UNFOLLOW" => {
                let (from, to) = two_names(&parts)?;
                Command::Unfollow { from, to }
            }
            "MSG" => {
                // content comes last and may contain the separator
                let mut fields = rest.splitn(3, '/');
                match (fields.next(), fields.next(), fields.next()) {
                    (Some(from), Some(to), Some(content))
                        if !from.is_empty() && !to.is_empty() =>
                    {
                        Command::SendMessage {
                            from: from.to_string(),
                            to: to.to_string(),
                            content: content.to_string(),
                        }
                    }
                    _ => bail!("MSG needs sender, recipient and content"),
                }
            }
            "CONV" => {
                let (user, other) = two_names(&parts)?;
                Command::Conversation { user, other }
            }
            "PARTNERS" => Command::Partners {
                username: one_name(&parts)?,
            },
            "REQBLOCK" => {
                let (from, to) = two_names(&parts)?;
                Command::RequestBlock { from, to }
            }
            "BLOCK" => {
                let (from, to) = two_names(&parts)?;
                Command::FinalizeBlock { from, to }
            }
            "UNBLOCK" => {
                let (from, to) = two_names(&parts)?;
                Command::Unblock { from, to }
            }
            "ISBLOCKED" => {
                let (from, to) = two_names(&parts)?;
                Command::IsBlocked { from, to }
            }
            "EXISTS" => Command::Exists {
                username: one_name(&parts)?,
            },
            "USERS" => {
                if !parts.is_empty() {
                    bail!("USERS takes no arguments");
                }
                Command::Users
            }
            "FOLLOWERS" => Command::Followers {
                username: one_name(&parts)?,
            },
            "SUGGEST" => match parts.as_slice() {
                [username] if !username.is_empty() => Command::Suggest {
                    username: username.to_string(),
                    depth: DEFAULT_SUGGEST_DEPTH,
                },
                [username, depth] if !username.is_empty() => Command::Suggest {
                    username: username.to_string(),
                    depth: depth.parse()?,
                },
                _ => bail!("SUGGEST needs a username and an optional depth"),
            },
            "GRAPH" => {
                if !parts.is_empty() {
                    bail!("GRAPH takes no arguments");
                }
                Command::Graph
            }
            other => bail!("unknown command {:?}", other),
        };
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::AddUser { username } => write!(f, "ADDUSER/{}", username),
            Command::DeleteUser { username } => write!(f, "DELUSER/{}", username),
            Command::Follow { from, to } => write!(f, "FOLLOW/{}/{}", from, to),
            Command::Unfollow { from, to } => write!(f, "UNFOLLOW/{}/{}", from, to),
            Command::SendMessage { from, to, content } => {
                write!(f, "MSG/{}/{}/{}", from, to, content)
            }
            Command::Conversation { user, other } => write!(f, "CONV/{}/{}", user, other),
            Command::Partners { username } => write!(f, "PARTNERS/{}", username),
            Command::RequestBlock { from, to } => write!(f, "REQBLOCK/{}/{}", from, to),
            Command::FinalizeBlock { from, to } => write!(f, "BLOCK/{}/{}", from, to),
            Command::Unblock { from, to } => write!(f, "UNBLOCK/{}/{}", from, to),
            Command::IsBlocked { from, to } => write!(f, "ISBLOCKED/{}/{}", from, to),
            Command::Exists { username } => write!(f, "EXISTS/{}", username),
            Command::Users => write!(f, "USERS"),
            Command::Followers { username } => write!(f, "FOLLOWERS/{}", username),
            Command::Suggest { username, depth } => write!(f, "SUGGEST/{}/{}", username, depth),
            Command::Graph => write!(f, "GRAPH"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_follow() {
        let command = Command::parse("FOLLOW/Alice/Bob").unwrap();
        assert_eq!(
            command,
            Command::Follow {
                from: "Alice".into(),
                to: "Bob".into()
            }
        );
    }

    #[test]
    fn parse_message_with_separator_in_content() {
        let command = Command::parse("MSG/Alice/Bob/see you at 10/11").unwrap();
        assert_eq!(
            command,
            Command::SendMessage {
                from: "Alice".into(),
                to: "Bob".into(),
                content: "see you at 10/11".into()
            }
        );
    }

    #[test]
    fn parse_suggest_default_depth() {
        let command = Command::parse("SUGGEST/Alice").unwrap();
        assert_eq!(
            command,
            Command::Suggest {
                username: "Alice".into(),
                depth: DEFAULT_SUGGEST_DEPTH
            }
        );
        let command = Command::parse("SUGGEST/Alice/3").unwrap();
        assert_eq!(
            command,
            Command::Suggest {
                username: "Alice".into(),
                depth: 3
            }
        );
    }

    #[test]
    fn reject_malformed_lines() {
        assert!(Command::parse("").is_err());
        assert!(Command::parse("FOLLOW/Alice").is_err());
        assert!(Command::parse("FOLLOW/Alice/Bob/extra").is_err());
        assert!(Command::parse("DANCE/Alice").is_err());
        assert!(Command::parse("MSG/Alice/Bob").is_err());
        assert!(Command::parse("SUGGEST/Alice/deep").is_err());
    }

    #[test]
    fn display_round_trip() {
        let commands = vec![
            Command::parse("ADDUSER/Frank").unwrap(),
            Command::parse("MSG/Alice/Bob/hello").unwrap(),
            Command::parse("BLOCK/Charlie/Alice").unwrap(),
            Command::parse("USERS").unwrap(),
        ];
        for command in commands {
            assert_eq!(Command::parse(&command.to_string()).unwrap(), command);
        }
    }
}
