//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Format feedback as emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback.iter().map(|c| c.to_emoji()).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Plural suffix for a count
#[must_use]
pub const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Correctness, check};

    #[test]
    fn feedback_to_emoji_all_wrong() {
        let emoji = feedback_to_emoji(&[Correctness::Wrong; 5]);
        assert_eq!(emoji, "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn feedback_to_emoji_mixed() {
        let emoji = feedback_to_emoji(&check("abcde", "abxxa"));
        assert_eq!(emoji, "🟩🟩⬜⬜⬜");
        let emoji = feedback_to_emoji(&check("slate", "crane"));
        assert_eq!(emoji, "⬜⬜🟩⬜🟩");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn plural_suffix() {
        assert_eq!(plural(1), "");
        assert_eq!(plural(2), "s");
    }
}
