//! Scoring of typed and multiple-choice answers
//!
//! Typed answers get up to [`MAX_ATTEMPTS`] tries and earn fewer stars the
//! more tries they need. Multiple-choice picks are all or nothing.

use crate::utils::text::fuzzy_match;

/// Number of tries a student gets for a typed answer
pub const MAX_ATTEMPTS: u32 = 3;

/// Number of wrong options offered next to the correct one
pub const WRONG_CHOICES: usize = 3;

/// Stars for a correct typed answer given on the 1-based `attempt`
///
/// `0` is treated like the first attempt.
pub fn stars_for_attempt(attempt: u32) -> u8 {
    match attempt {
        0 | 1 => 3,
        2 => 2,
        _ => 1,
    }
}

/// What happens after a typed answer was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The answer matched, the question is done
    Correct { stars: u8 },
    /// Wrong, the student may try again
    Retry { next_attempt: u32 },
    /// Wrong on the last allowed attempt
    Failed,
}

impl AttemptOutcome {
    /// Stars earned, or `None` while the question is still open
    pub fn stars(&self) -> Option<u8> {
        match self {
            AttemptOutcome::Correct { stars } => Some(*stars),
            AttemptOutcome::Retry { .. } => None,
            AttemptOutcome::Failed => Some(0),
        }
    }
}

/// Judge a typed answer submitted on the 1-based `attempt`
///
/// Matching ignores case, accents and surrounding whitespace.
pub fn judge_typed_answer(input: &str, expected: &str, attempt: u32) -> AttemptOutcome {
    if fuzzy_match(input, expected) {
        AttemptOutcome::Correct {
            stars: stars_for_attempt(attempt),
        }
    } else if attempt >= MAX_ATTEMPTS {
        AttemptOutcome::Failed
    } else {
        AttemptOutcome::Retry {
            next_attempt: attempt + 1,
        }
    }
}

/// Stars for a multiple-choice pick
///
/// Options come from the catalog verbatim, so they are compared exactly.
pub fn stars_for_choice(picked: &str, correct: &str) -> u8 {
    if picked == correct { 3 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some_eq};

    #[test]
    fn fewer_stars_for_later_attempts() {
        assert_eq!(stars_for_attempt(0), 3);
        assert_eq!(stars_for_attempt(1), 3);
        assert_eq!(stars_for_attempt(2), 2);
        assert_eq!(stars_for_attempt(3), 1);
        assert_eq!(stars_for_attempt(7), 1);
    }

    #[test]
    fn correct_answer_on_each_attempt() {
        assert_eq!(
            judge_typed_answer("bern", "Bern", 1),
            AttemptOutcome::Correct { stars: 3 }
        );
        assert_eq!(
            judge_typed_answer("zurich", " Zürich ", 2),
            AttemptOutcome::Correct { stars: 2 }
        );
        assert_eq!(
            judge_typed_answer("WIEN", "Wien", 3),
            AttemptOutcome::Correct { stars: 1 }
        );
    }

    #[test]
    fn wrong_answers_retry_until_the_last_attempt() {
        let first = judge_typed_answer("Basel", "Bern", 1);
        assert_eq!(first, AttemptOutcome::Retry { next_attempt: 2 });
        assert_none!(first.stars());

        let second = judge_typed_answer("Genf", "Bern", 2);
        assert_eq!(second, AttemptOutcome::Retry { next_attempt: 3 });

        let last = judge_typed_answer("Zürich", "Bern", MAX_ATTEMPTS);
        assert_eq!(last, AttemptOutcome::Failed);
        assert_some_eq!(last.stars(), 0);

        assert_eq!(judge_typed_answer("", "Bern", u32::MAX), AttemptOutcome::Failed);
    }

    #[test]
    fn multiple_choice_is_all_or_nothing() {
        assert_eq!(stars_for_choice("Bern", "Bern"), 3);
        assert_eq!(stars_for_choice("bern", "Bern"), 0);
        assert_eq!(stars_for_choice("Wien", "Bern"), 0);
    }
}
