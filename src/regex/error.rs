use thiserror::Error;

// Every way a pattern can fail to compile. Detection stops the compile
// immediately; nothing is recovered or rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("unterminated bracket expression: '[' without matching ']'")]
    UnterminatedBracket,
    #[error("empty bracket expression")]
    EmptyBracket,
    #[error("unterminated capture group: '(' without matching ')'")]
    UnterminatedGroup,
    #[error("empty capture group")]
    EmptyGroup,
    #[error("dangling escape at end of pattern")]
    DanglingEscape,
    #[error("empty alternative: '|' with nothing on one side")]
    EmptyAlternative,
}
