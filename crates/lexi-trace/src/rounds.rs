//! Deterministic quiz rounds
//!
//! Round content and answer placement are pure functions of the round index
//! and the prompt word, so a resumed session shows exactly what it showed
//! before without persisting any random state.

use serde::{Deserialize, Serialize};

/// Choices for one quiz round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundItem {
    pub choices: Vec<String>,
    pub correct_index: usize,
}

impl RoundItem {
    /// The correct choice, if any
    pub fn correct(&self) -> Option<&str> {
        self.choices.get(self.correct_index).map(String::as_str)
    }
}

/// Wrap-around window of `count` items for a 1-based round index.
///
/// Round `r` starts at `((r - 1) * count) mod pool.len()`. Round 0 is treated
/// as round 1. A window longer than the pool wraps onto itself.
pub fn deterministic_pick<T: Clone>(pool: &[T], round_index: usize, count: usize) -> Vec<T> {
    let len = pool.len();
    if len == 0 || count == 0 {
        return Vec::new();
    }
    let round = round_index.max(1) - 1;
    let start = ((round % len) * (count % len)) % len;
    (0..count).map(|i| pool[(start + i) % len].clone()).collect()
}

/// Polynomial string hash over UTF-16 code units, `h = h * 31 + c` mod 2^32
pub fn stable_hash(key: &str) -> u32 {
    key.encode_utf16()
        .fold(0u32, |h, c| h.wrapping_mul(31).wrapping_add(c as u32))
}

/// Put `correct` at a slot derived from `key` and fill the rest with the other
/// choices in their original order. Only the first copy of `correct` is moved.
pub fn place_correct<S: AsRef<str>>(choices: &[S], correct: &str, key: &str) -> RoundItem {
    let n = choices.len();
    if n == 0 {
        return RoundItem { choices: Vec::new(), correct_index: 0 };
    }

    let own = choices.iter().position(|c| c.as_ref() == correct);
    let mut others = choices
        .iter()
        .enumerate()
        .filter(|&(i, _)| Some(i) != own)
        .map(|(_, c)| c.as_ref().to_string());

    let pos = stable_hash(key) as usize % n;
    let mut placed = Vec::with_capacity(n);
    for slot in 0..n {
        if slot == pos {
            placed.push(correct.to_string());
        } else if let Some(other) = others.next() {
            placed.push(other);
        }
    }
    RoundItem { choices: placed, correct_index: pos }
}

/// Build a full round from a word pool: the first picked word is the target.
pub fn build_round<S: AsRef<str> + Clone>(pool: &[S], round_index: usize, count: usize) -> RoundItem {
    let picked = deterministic_pick(pool, round_index, count);
    let Some(target) = picked.first().map(|t| t.as_ref().to_string()) else {
        return RoundItem { choices: Vec::new(), correct_index: 0 };
    };
    place_correct(&picked, &target, &target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_windows() {
        let pool = ["a", "b", "c", "d"];
        assert_eq!(deterministic_pick(&pool, 1, 2), vec!["a", "b"]);
        assert_eq!(deterministic_pick(&pool, 2, 2), vec!["c", "d"]);
        assert_eq!(deterministic_pick(&pool, 3, 2), vec!["a", "b"]);
    }

    #[test]
    fn test_pick_wraps_mid_window() {
        let pool = ["a", "b", "c", "d", "e"];
        assert_eq!(deterministic_pick(&pool, 2, 3), vec!["d", "e", "a"]);
    }

    #[test]
    fn test_pick_edge_cases() {
        let empty: [&str; 0] = [];
        assert!(deterministic_pick(&empty, 1, 2).is_empty());
        assert!(deterministic_pick(&["a"], 1, 0).is_empty());
        assert_eq!(deterministic_pick(&["a", "b"], 0, 1), vec!["a"]);
        assert_eq!(deterministic_pick(&["a", "b"], 1, 5), vec!["a", "b", "a", "b", "a"]);
    }

    #[test]
    fn test_stable_hash() {
        assert_eq!(stable_hash(""), 0);
        assert_eq!(stable_hash("a"), 97);
        assert_eq!(stable_hash("cat"), (99 * 31 + 97) * 31 + 116);
    }

    #[test]
    fn test_place_correct_stable() {
        let first = place_correct(&["X", "Y", "Z"], "Y", "cat");
        for _ in 0..10 {
            assert_eq!(place_correct(&["X", "Y", "Z"], "Y", "cat"), first);
        }
        // "cat" hashes to 98262, 98262 % 3 == 0
        assert_eq!(first.correct_index, 0);
        assert_eq!(first.choices, vec!["Y", "X", "Z"]);
        assert_eq!(first.correct(), Some("Y"));
    }

    #[test]
    fn test_place_correct_missing_answer() {
        let item = place_correct(&["X", "Y"], "Q", "a");
        // 97 % 2 == 1
        assert_eq!(item.choices, vec!["X", "Q"]);
        assert_eq!(item.correct_index, 1);
    }

    #[test]
    fn test_place_correct_duplicate_answer() {
        // 97 % 3 == 1
        let item = place_correct(&["Y", "X", "Y"], "Y", "a");
        assert_eq!(item.choices, vec!["X", "Y", "Y"]);
        assert_eq!(item.correct_index, 1);
    }

    #[test]
    fn test_place_correct_empty() {
        let empty: [&str; 0] = [];
        let item = place_correct(&empty, "Y", "cat");
        assert!(item.choices.is_empty());
        assert_eq!(item.correct(), None);
    }

    #[test]
    fn test_round_item_json() {
        let item = RoundItem { choices: vec!["a".into()], correct_index: 0 };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"choices":["a"],"correctIndex":0}"#);
    }

    #[test]
    fn test_build_round() {
        let pool = ["sun", "sit", "sat", "set"];
        let round = build_round(&pool, 2, 2);
        assert_eq!(round.correct(), Some("sat"));
        assert_eq!(round.choices.len(), 2);
        assert_eq!(build_round(&pool, 2, 2), round);
    }
}
