use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use log::debug;

use crate::message::{BlockRequest, Message};

/// Whole social graph state: users with who they follow, the message log
/// and the two-phase block workflow.
///
/// Every mutating operation reports success as a bool; a failed precondition
/// (unknown user, duplicate request, missing edge) is an expected condition,
/// not an error.
#[derive(Debug, Default)]
pub struct SocialNetwork {
    /// username -> set of usernames they follow, in user insertion order
    graph: IndexMap<String, HashSet<String>>,
    /// append-only, index is arrival order
    messages: Vec<Message>,
    /// block requests waiting for admin finalization
    pending_blocks: Vec<BlockRequest>,
    /// blocking user -> set of users they have temporarily blocked
    temp_blocks: HashMap<String, HashSet<String>>,
}

impl SocialNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user. Adding an existing user is a no-op.
    pub fn add_user(&mut self, username: &str) {
        if !self.graph.contains_key(username) {
            self.graph.insert(username.to_string(), HashSet::new());
        }
    }

    /// Remove a user and every reference to it: follow edges in both
    /// directions, messages it sent or received, pending block requests
    /// naming it and temporary blocks on either side.
    /// Deleting an unknown user is a no-op.
    pub fn delete_user(&mut self, username: &str) {
        self.graph.shift_remove(username);
        for follows in self.graph.values_mut() {
            follows.remove(username);
        }
        self.messages
            .retain(|msg| msg.sender != username && msg.recipient != username);
        self.pending_blocks.retain(|req| !req.names(username));
        self.temp_blocks.remove(username);
        for blocked in self.temp_blocks.values_mut() {
            blocked.remove(username);
        }
        debug!("deleted user {}", username);
    }

    pub fn contains(&self, username: &str) -> bool {
        self.graph.contains_key(username)
    }

    /// All usernames in insertion order.
    pub fn users(&self) -> Vec<String> {
        self.graph.keys().cloned().collect()
    }

    /// Add a follow edge. Both users must exist; following twice is a
    /// no-op success.
    pub fn follow(&mut self, follower: &str, following: &str) -> bool {
        if self.graph.contains_key(follower) && self.graph.contains_key(following) {
            if let Some(follows) = self.graph.get_mut(follower) {
                follows.insert(following.to_string());
            }
            true
        } else {
            false
        }
    }

    /// Remove a follow edge. Fails if the edge is not present.
    pub fn unfollow(&mut self, follower: &str, following: &str) -> bool {
        self.graph
            .get_mut(follower)
            .map(|follows| follows.remove(following))
            .unwrap_or(false)
    }

    /// Who `username` follows. None for an unknown user.
    pub fn following(&self, username: &str) -> Option<&HashSet<String>> {
        self.graph.get(username)
    }

    /// Who follows `username`. Scans every adjacency set, O(total edges);
    /// fine at this scale, a reverse index would be needed for a big graph.
    pub fn followers(&self, username: &str) -> HashSet<String> {
        self.graph
            .iter()
            .filter(|(_, follows)| follows.contains(username))
            .map(|(user, _)| user.clone())
            .collect()
    }

    /// Deliver a message unless the recipient has temporarily blocked the
    /// sender. The check is directional: the sender having blocked the
    /// recipient does not stop delivery.
    pub fn send_message(&mut self, sender: &str, recipient: &str, content: &str) -> bool {
        if self.is_blocked(recipient, sender) {
            return false;
        }
        if self.graph.contains_key(sender) && self.graph.contains_key(recipient) {
            self.messages.push(Message::new(sender, recipient, content));
            true
        } else {
            false
        }
    }

    /// Full message history between two users, both directions, in
    /// arrival order.
    pub fn conversation(&self, user1: &str, user2: &str) -> Vec<Message> {
        self.messages
            .iter()
            .filter(|msg| msg.between(user1, user2))
            .cloned()
            .collect()
    }

    /// Users that share at least one message with `username`.
    pub fn conversation_partners(&self, username: &str) -> HashSet<String> {
        let mut partners = HashSet::new();
        for msg in &self.messages {
            if msg.sender == username {
                partners.insert(msg.recipient.clone());
            } else if msg.recipient == username {
                partners.insert(msg.sender.clone());
            }
        }
        partners
    }

    /// File a block request for the admin. At most one pending request per
    /// (requester, target) pair.
    pub fn request_block(&mut self, requester: &str, target: &str) -> bool {
        if !self.graph.contains_key(requester) || !self.graph.contains_key(target) {
            return false;
        }
        if self
            .pending_blocks
            .iter()
            .any(|req| req.matches(requester, target))
        {
            return false;
        }
        self.pending_blocks.push(BlockRequest::new(requester, target));
        true
    }

    /// Admin action: put the temporary block in effect and drop any pending
    /// requests for the pair. A prior request is not required, so the admin
    /// can block directly.
    pub fn finalize_block(&mut self, requester: &str, target: &str) -> bool {
        if self.graph.contains_key(requester) && self.graph.contains_key(target) {
            self.temp_blocks
                .entry(requester.to_string())
                .or_default()
                .insert(target.to_string());
            self.pending_blocks
                .retain(|req| !req.matches(requester, target));
            true
        } else {
            false
        }
    }

    /// Lift a temporary block. Fails if it is not in effect.
    pub fn unblock(&mut self, requester: &str, target: &str) -> bool {
        self.temp_blocks
            .get_mut(requester)
            .map(|blocked| blocked.remove(target))
            .unwrap_or(false)
    }

    pub fn is_blocked(&self, blocker: &str, blocked: &str) -> bool {
        self.temp_blocks
            .get(blocker)
            .map(|list| list.contains(blocked))
            .unwrap_or(false)
    }

    /// Requests still waiting for the admin, in filing order.
    pub fn pending_requests(&self) -> &[BlockRequest] {
        &self.pending_blocks
    }

    /// Every (blocker, blocked) pair currently in effect.
    pub fn blocked_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (blocker, blocked_set) in &self.temp_blocks {
            for blocked in blocked_set {
                pairs.push((blocker.clone(), blocked.clone()));
            }
        }
        pairs
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}
