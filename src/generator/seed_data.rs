//! Fixed vocabularies and the demonstration friendships

use crate::graph::UserId;

/// First names; a user's name is one of these followed by its id
pub const NAMES: [&str; 20] = [
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry", "Ivy", "Jack", "Kate",
    "Liam", "Mia", "Noah", "Olivia", "Emma", "Lucas", "Sophia", "Ethan", "Ava",
];

/// Post bodies
pub const CONTENTS: [&str; 20] = [
    "Just had a great day!",
    "Working on something exciting!",
    "Enjoying the weekend vibes!",
    "Learning new things every day.",
    "Coffee and code - perfect combination!",
    "Nature is amazing!",
    "Music makes everything better.",
    "Traveling broadens the mind.",
    "Books are my best friends.",
    "Fitness is key to happiness.",
    "Sunset views are breathtaking!",
    "Cooking a new recipe today.",
    "Gardening is so therapeutic.",
    "Movie night with friends.",
    "Beach day was incredible!",
    "Mountain hiking adventure.",
    "Art exhibition was inspiring.",
    "Concert last night was amazing!",
    "New book recommendation.",
    "Weekend getaway was refreshing.",
];

/// Hub user befriended with every id in [`HUB_FRIENDS`]
pub const DEMONSTRATION_HUB: UserId = 1;

pub const HUB_FRIENDS: std::ops::RangeInclusive<UserId> = 2..=8;

/// First helper id; helpers are shared by both members of a pair
pub const FIRST_HELPER: UserId = 10;

/// `(a, b, mutual friend count)` guaranteed in the generated graph
pub const DEMONSTRATION_PAIRS: [(UserId, UserId, usize); 4] =
    [(2, 3, 7), (4, 5, 6), (6, 7, 5), (8, 9, 4)];

/// Ids `1..=SEALED_BLOCK` get no friendships besides the demonstration ones
pub const SEALED_BLOCK: UserId = 15;

/// Demonstration edges in insertion order
///
/// Hub edges first, then for each pair the helpers `FIRST_HELPER..` in
/// ascending order, alternating between the two members. A pair whose members
/// are both hub friends needs one helper fewer.
pub fn demonstration_friendships() -> Vec<(UserId, UserId)> {
    let mut edges: Vec<(UserId, UserId)> =
        HUB_FRIENDS.map(|friend| (DEMONSTRATION_HUB, friend)).collect();

    for (a, b, expected) in DEMONSTRATION_PAIRS {
        let via_hub = usize::from(HUB_FRIENDS.contains(&a) && HUB_FRIENDS.contains(&b));
        let helpers = (expected - via_hub) as UserId;
        for helper in FIRST_HELPER..FIRST_HELPER + helpers {
            edges.push((a, helper));
            edges.push((b, helper));
        }
    }
    edges
}
