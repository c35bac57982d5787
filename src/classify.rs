use std::collections::HashSet;

use serde::Serialize;

use crate::network::SocialNetwork;

/// Follow and block edges partitioned for the graph renderer.
///
/// Mutual pairs are stored once, with the two names in lexicographic order
/// so the same pair never shows up twice.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct GraphView {
    pub nodes: Vec<String>,
    pub mutual: Vec<(String, String)>,
    pub one_way: Vec<(String, String)>,
    pub blocked: Vec<(String, String)>,
}

impl GraphView {
    pub fn has_mutual(&self, a: &str, b: &str) -> bool {
        let (first, second) = ordered(a, b);
        self.mutual
            .iter()
            .any(|(u, v)| u == first && v == second)
    }

    pub fn has_one_way(&self, from: &str, to: &str) -> bool {
        self.one_way.iter().any(|(u, v)| u == from && v == to)
    }

    pub fn has_blocked(&self, blocker: &str, blocked: &str) -> bool {
        self.blocked
            .iter()
            .any(|(u, v)| u == blocker && v == blocked)
    }
}

fn ordered<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Split the current graph into mutual follows, one-way follows and active
/// temporary blocks. Read-only; rendering itself happens elsewhere.
pub fn classify(network: &SocialNetwork) -> GraphView {
    let nodes = network.users();
    let mut mutual: HashSet<(String, String)> = HashSet::new();
    let mut one_way = Vec::new();

    for user in &nodes {
        let follows = match network.following(user) {
            Some(follows) => follows,
            None => continue,
        };
        for other in follows {
            let reciprocated = network
                .following(other)
                .map(|back| back.contains(user))
                .unwrap_or(false);
            if reciprocated {
                let (first, second) = ordered(user, other);
                mutual.insert((first.to_string(), second.to_string()));
            } else {
                one_way.push((user.clone(), other.clone()));
            }
        }
    }

    GraphView {
        nodes,
        mutual: mutual.into_iter().collect(),
        one_way,
        blocked: network.blocked_pairs(),
    }
}
