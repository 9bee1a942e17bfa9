//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Render a feedback code as an emoji row
#[must_use]
pub fn feedback_row(feedback: Feedback) -> String {
    feedback
        .digits()
        .iter()
        .map(|digit| match digit {
            2 => '🟩',
            1 => '🟨',
            _ => '⬜',
        })
        .collect()
}

/// Render a histogram bar scaled against the largest bucket
#[must_use]
pub fn distribution_bar(count: usize, max_count: usize, width: usize) -> String {
    let filled = if max_count == 0 {
        0
    } else {
        (count * width / max_count).max(usize::from(count > 0))
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn feedback_row_all_gray() {
        assert_eq!(feedback_row(Feedback::new(0)), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn feedback_row_all_green() {
        assert_eq!(feedback_row(Feedback::PERFECT), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn feedback_row_mixed() {
        let guess = Word::new("crane").unwrap();
        let answer = Word::new("slate").unwrap();
        let fb = Feedback::score(&guess, &answer);
        assert_eq!(feedback_row(fb), "⬜⬜🟩⬜🟩");
    }

    #[test]
    fn distribution_bar_scales() {
        assert_eq!(distribution_bar(0, 10, 4), "░░░░");
        assert_eq!(distribution_bar(10, 10, 4), "████");
        assert_eq!(distribution_bar(5, 10, 4), "██░░");
    }

    #[test]
    fn distribution_bar_nonzero_count_is_visible() {
        // a tiny bucket still shows one cell
        assert_eq!(distribution_bar(1, 1000, 10), "█░░░░░░░░░");
    }

    #[test]
    fn distribution_bar_empty_histogram() {
        assert_eq!(distribution_bar(0, 0, 4), "░░░░");
    }
}
