use serde::{Deserialize, Serialize};

/// Direct message between two users.
/// Position in the network's message log is the arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub recipient: String,
    pub content: String,
}

impl Message {
    pub fn new(sender: &str, recipient: &str, content: &str) -> Self {
        Self {
            sender: sender.to_string(),
            recipient: recipient.to_string(),
            content: content.to_string(),
        }
    }

    /// Does this message belong to the conversation between `a` and `b`?
    /// Direction does not matter.
    pub fn between(&self, a: &str, b: &str) -> bool {
        (self.sender == a && self.recipient == b) || (self.sender == b && self.recipient == a)
    }
}

/// Block request awaiting admin finalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRequest {
    pub requester: String,
    pub target: String,
}

impl BlockRequest {
    pub fn new(requester: &str, target: &str) -> Self {
        Self {
            requester: requester.to_string(),
            target: target.to_string(),
        }
    }

    pub fn matches(&self, requester: &str, target: &str) -> bool {
        self.requester == requester && self.target == target
    }

    pub fn names(&self, user: &str) -> bool {
        self.requester == user || self.target == user
    }
}
