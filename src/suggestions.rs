use std::collections::{HashMap, HashSet, VecDeque};

use crate::network::SocialNetwork;

/// Breadth-first walk over outgoing follow edges, bounded by `max_depth`
/// hops from `start`. Each node is recorded at the depth it is first
/// discovered; nodes reached at exactly `max_depth` are kept but not
/// expanded further.
///
/// The result is "people you might know": every discovered user except
/// `start` itself and the users `start` already follows. Unknown `start`
/// yields an empty set.
pub fn suggest(network: &SocialNetwork, start: &str, max_depth: usize) -> HashSet<String> {
    let direct = match network.following(start) {
        Some(follows) => follows,
        None => return HashSet::new(),
    };

    let mut visited: HashMap<String, usize> = HashMap::new();
    let mut queue: VecDeque<String> = VecDeque::new();
    visited.insert(start.to_string(), 0);
    queue.push_back(start.to_string());

    while let Some(user) = queue.pop_front() {
        let depth = visited[&user];
        if depth == max_depth {
            continue;
        }
        if let Some(follows) = network.following(&user) {
            for next in follows {
                if !visited.contains_key(next) {
                    visited.insert(next.clone(), depth + 1);
                    queue.push_back(next.clone());
                }
            }
        }
    }

    visited
        .into_iter()
        .map(|(user, _)| user)
        .filter(|user| user != start && !direct.contains(user))
        .collect()
}
