//! Password strength heuristic.
//!
//! Up to three points for length (8, 12 and 16 characters) and up to three
//! for variety (one per character class present, capped at three). The
//! score out of six becomes a percentage, and the percentage a label.

use std::fmt;

use crate::pass::CharacterClass;

pub const MAX_SCORE: u8 = 6;

const LENGTH_THRESHOLDS: [usize; 3] = [8, 12, 16];
const MAX_VARIETY: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    Weak,
    Medium,
    Strong,
    Excellent,
}

impl Label {
    fn from_percentage(percentage: u8) -> Self {
        match percentage {
            80.. => Label::Excellent,
            60.. => Label::Strong,
            40.. => Label::Medium,
            _ => Label::Weak,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Weak => "Weak",
            Label::Medium => "Medium",
            Label::Strong => "Strong",
            Label::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: u8,
    pub percentage: u8,
    /// `None` for the neutral result of an empty password.
    pub label: Option<Label>,
}

impl StrengthResult {
    /// The neutral result shown when there is no password.
    pub const NEUTRAL: StrengthResult = StrengthResult {
        score: 0,
        percentage: 0,
        label: None,
    };

    pub fn is_neutral(&self) -> bool {
        self.label.is_none()
    }
}

/// Score a password. Pure: depends only on `password`.
pub fn estimate(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult::NEUTRAL;
    }

    let length = password.chars().count();
    let length_points = LENGTH_THRESHOLDS.iter().filter(|&&t| length >= t).count() as u8;

    let present = CharacterClass::ALL
        .into_iter()
        .filter(|class| password.chars().any(|c| class.matches(c)))
        .count() as u8;
    let variety_points = present.min(MAX_VARIETY);

    let score = length_points + variety_points;
    let percentage = (f64::from(score) / f64::from(MAX_SCORE) * 100.0).round() as u8;

    StrengthResult {
        score,
        percentage,
        label: Some(Label::from_percentage(percentage)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_neutral() {
        let result = estimate("");
        assert_eq!(result.percentage, 0);
        assert_eq!(result.score, 0);
        assert!(result.is_neutral());
    }

    #[test]
    fn eight_lowercase_is_weak() {
        let result = estimate("abcdefgh");
        assert_eq!(result.score, 2);
        assert_eq!(result.percentage, 33);
        assert_eq!(result.label, Some(Label::Weak));
    }

    #[test]
    fn twelve_with_all_classes_is_excellent() {
        let result = estimate("Abcdefgh123!");
        assert_eq!(result.score, 5);
        assert_eq!(result.percentage, 83);
        assert_eq!(result.label, Some(Label::Excellent));
    }

    #[test]
    fn length_thresholds_are_cumulative() {
        assert_eq!(estimate("aaaaaaa").score, 1);
        assert_eq!(estimate("aaaaaaaa").score, 2);
        assert_eq!(estimate("aaaaaaaaaaaa").score, 3);
        assert_eq!(estimate("aaaaaaaaaaaaaaaa").score, 4);
        assert_eq!(estimate(&"a".repeat(64)).score, 4);
    }

    #[test]
    fn variety_is_capped_at_three() {
        assert_eq!(estimate("aA1").score, 3);
        assert_eq!(estimate("aA1!").score, 3);
        assert_eq!(estimate(&"aA1!".repeat(4)).score, MAX_SCORE);
        assert_eq!(estimate(&"aA1!".repeat(4)).percentage, 100);
    }

    #[test]
    fn every_score_maps_to_expected_percentage_and_label() {
        // (password, score, percentage, label)
        let cases = [
            ("a", 1, 17, Label::Weak),
            ("aA", 2, 33, Label::Weak),
            ("aA1", 3, 50, Label::Medium),
            ("aaaaaaaA", 3, 50, Label::Medium),
            ("aaaaaaA1", 4, 67, Label::Strong),
            ("aaaaaaaaaaA1", 5, 83, Label::Excellent),
            ("aaaaaaaaaaaaaA1!", 6, 100, Label::Excellent),
        ];
        for (password, score, percentage, label) in cases {
            let result = estimate(password);
            assert_eq!(result.score, score, "{password}");
            assert_eq!(result.percentage, percentage, "{password}");
            assert_eq!(result.label, Some(label), "{password}");
        }
    }

    #[test]
    fn backslash_counts_as_symbol() {
        assert_eq!(estimate("\\").score, 1);
        assert_eq!(estimate("a\\").score, 2);
    }

    #[test]
    fn unlisted_characters_add_no_variety() {
        assert_eq!(estimate("éééééééé").score, 1);
        assert_eq!(estimate("        ").score, 1);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 4 chars, 8 bytes
        assert_eq!(estimate("éééé").score, 0);
    }

    #[test]
    fn estimate_is_pure() {
        let password = "Tr0ub4dor&3";
        assert_eq!(estimate(password), estimate(password));
    }
}
