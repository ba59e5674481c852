//! Guess evaluation command
//!
//! Scores a single guess against a chosen solution without touching saved state.

use crate::catalog::Catalog;
use crate::core::{Code, CodeError, Feedback};

/// Result of evaluating one guess
pub struct EvaluationResult {
    pub guess: Code,
    pub solution: Code,
    pub feedback: Feedback,
    /// Whether the guess would be accepted in a real game
    pub in_catalog: bool,
}

/// Evaluate `guess` against `solution`
///
/// # Errors
///
/// Returns an error if either argument is not a well-formed three-letter code.
pub fn evaluate_guess(
    guess: &str,
    solution: &str,
    catalog: &Catalog,
) -> Result<EvaluationResult, CodeError> {
    let guess = Code::new(guess)?;
    let solution = Code::new(solution)?;

    Ok(EvaluationResult {
        guess,
        solution,
        feedback: Feedback::calculate(&guess, &solution),
        in_catalog: catalog.contains(&guess),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileState;

    fn catalog() -> Catalog {
        Catalog::parse("SFO\nSEA\nFSO").unwrap()
    }

    #[test]
    fn evaluate_known_guess() {
        let result = evaluate_guess("fso", "sfo", &catalog()).unwrap();

        assert_eq!(result.guess.as_str(), "FSO");
        assert_eq!(result.solution.as_str(), "SFO");
        assert!(result.in_catalog);
        assert_eq!(
            result.feedback.tiles(),
            &[TileState::Present, TileState::Present, TileState::Correct]
        );
    }

    #[test]
    fn evaluate_guess_outside_catalog() {
        let result = evaluate_guess("XYZ", "SFO", &catalog()).unwrap();
        assert!(!result.in_catalog);
        assert_eq!(result.feedback.to_emoji(), "⬜⬜⬜");
    }

    #[test]
    fn evaluate_malformed_input() {
        assert_eq!(
            evaluate_guess("SFOO", "SFO", &catalog()).err(),
            Some(CodeError::InvalidLength(4))
        );
        assert_eq!(
            evaluate_guess("SFO", "S-O", &catalog()).err(),
            Some(CodeError::InvalidCharacters)
        );
    }
}
