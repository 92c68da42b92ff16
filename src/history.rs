//! Run history and high score text codec
//!
//! History is stored as one line per finished run:
//!
//! ```text
//! <name> <score> [<tag> ...]
//! ```
//!
//! Fields are separated by single spaces and every line ends in `\n`.
//! Names and tags must not contain spaces or newlines; they are written
//! verbatim, not escaped. Decoding is lenient: lines with fewer than two
//! fields are skipped and unparsable scores read as 0.

use serde::{Deserialize, Serialize};

use crate::sim::RunIdentity;

/// One finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Display name of the flyer
    pub name: String,
    /// Final score
    pub score: u32,
    /// Cosmetic attributes worn during the run
    pub tags: Vec<String>,
}

impl RunRecord {
    pub fn new(identity: &RunIdentity, score: u32) -> Self {
        Self {
            name: identity.name.clone(),
            score,
            tags: identity.tags.clone(),
        }
    }
}

/// Highest score in a history, if any
pub fn best_score(records: &[RunRecord]) -> Option<u32> {
    records.iter().map(|r| r.score).max()
}

/// Encode a history as text
///
/// Precondition: no name or tag contains `' '` or `'\n'`.
pub fn encode_history(records: &[RunRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.name);
        out.push(' ');
        out.push_str(&record.score.to_string());
        for tag in &record.tags {
            out.push(' ');
            out.push_str(tag);
        }
        out.push('\n');
    }
    out
}

/// Decode a history, skipping anything that doesn't look like a record
pub fn decode_history(text: &str) -> Vec<RunRecord> {
    text.split('\n')
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let mut fields = line.split(' ');
            let name = fields.next()?;
            let score = fields.next()?;
            Some(RunRecord {
                name: name.to_string(),
                score: score.parse().unwrap_or(0),
                tags: fields.map(str::to_string).collect(),
            })
        })
        .collect()
}

/// Encode a high score as decimal text
pub fn encode_score(score: u32) -> String {
    score.to_string()
}

/// Decode a high score; anything unreadable is 0
pub fn decode_score(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(name: &str, score: u32, tags: &[&str]) -> RunRecord {
        RunRecord {
            name: name.to_string(),
            score,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_encode_format() {
        let history = vec![record("Gus", 12, &["cap", "scarf"]), record("Pip", 0, &[])];
        assert_eq!(encode_history(&history), "Gus 12 cap scarf\nPip 0\n");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_history(&[]), "");
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode_history("").is_empty());
        assert!(decode_history("\n\n").is_empty());
    }

    #[test]
    fn test_decode_skips_name_only_lines() {
        let history = decode_history("Gus 3\nlonely\nPip 5 crown\n");
        assert_eq!(history, vec![record("Gus", 3, &[]), record("Pip", 5, &["crown"])]);
    }

    #[test]
    fn test_decode_bad_score_is_zero() {
        let history = decode_history("Gus lots cap\n");
        assert_eq!(history, vec![record("Gus", 0, &["cap"])]);
    }

    #[test]
    fn test_decode_without_trailing_newline() {
        assert_eq!(decode_history("Gus 3"), vec![record("Gus", 3, &[])]);
    }

    #[test]
    fn test_score_codec() {
        assert_eq!(encode_score(42), "42");
        assert_eq!(decode_score("42"), 42);
        assert_eq!(decode_score("42\n"), 42);
        assert_eq!(decode_score(""), 0);
        assert_eq!(decode_score("null"), 0);
        assert_eq!(decode_score("-7"), 0);
    }

    #[test]
    fn test_best_score() {
        assert_eq!(best_score(&[]), None);
        let history = vec![record("a", 4, &[]), record("b", 9, &[]), record("c", 2, &[])];
        assert_eq!(best_score(&history), Some(9));
    }

    fn arb_field() -> impl Strategy<Value = String> {
        "[^ \n]{0,12}"
    }

    fn arb_record() -> impl Strategy<Value = RunRecord> {
        (arb_field(), any::<u32>(), prop::collection::vec(arb_field(), 0..4))
            .prop_map(|(name, score, tags)| RunRecord { name, score, tags })
    }

    proptest! {
        #[test]
        fn prop_history_round_trip(history in prop::collection::vec(arb_record(), 0..8)) {
            prop_assert_eq!(decode_history(&encode_history(&history)), history);
        }
    }
}
