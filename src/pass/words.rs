//! Word corpus for memorable passwords.

/// Common, easy-to-remember lowercase words. Order matters for
/// reproducible output under a fixed randomness source.
pub const WORDS: &[&str] = &[
    "apple", "banana", "cherry", "dolphin", "elephant", "forest", "guitar", "honey",
    "island", "jelly", "kangaroo", "lighthouse", "mountain", "ocean", "penguin", "quasar",
    "rainbow", "sunset", "tiger", "umbrella", "volcano", "waterfall", "xylophone", "yacht",
    "zebra", "adventure", "butterfly", "crystal", "diamond", "eclipse", "firefly", "galaxy",
    "horizon", "infinity", "journey", "kingdom", "lighthouse", "midnight", "nebula", "orchard",
    "paradise", "quest", "river", "sapphire", "thunder", "universe", "vortex", "whisper",
    "xenon", "zenith", "archer", "breeze", "castle", "dawn", "echo", "falcon",
    "glacier", "harvest", "ivory", "jade", "knight", "lantern", "meadow", "nectar",
    "oasis", "phoenix", "quartz", "reef", "shadow", "temple", "unison", "valley",
    "willow", "xerox", "yogurt", "zephyr",
];

/// Length of the shortest word in the corpus.
pub fn shortest() -> usize {
    WORDS.iter().map(|w| w.len()).min().unwrap_or(0)
}

/// Length of the longest word in the corpus.
pub fn longest() -> usize {
    WORDS.iter().map(|w| w.len()).max().unwrap_or(0)
}

/// Whether `word` (any case) is in the corpus.
pub fn contains(word: &str) -> bool {
    WORDS.iter().any(|w| w.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_shape() {
        assert_eq!(WORDS.len(), 76);
        assert_eq!(shortest(), 4);
        assert_eq!(longest(), 10);
        assert!(
            WORDS
                .iter()
                .all(|w| w.bytes().all(|b| b.is_ascii_lowercase()))
        );
    }

    #[test]
    fn contains_ignores_case() {
        assert!(contains("Tiger"));
        assert!(contains("zephyr"));
        assert!(!contains("zeph"));
    }
}
