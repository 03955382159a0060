pub mod ast;
pub mod error;
pub mod evaluator;
pub mod matcher;
pub mod parser;

pub use ast::{Pattern, Token};
pub use error::PatternError;
pub use matcher::try_match;
pub use parser::compile;

// Decides whether `pattern` matches somewhere in `subject`. A leading `^`
// pins the single attempt to offset zero; otherwise every start offset gets
// one attempt, left to right. Each call compiles the pattern fresh and
// discards it on return; nothing is shared between calls.
pub fn matches(subject: &str, pattern: &str) -> Result<bool, PatternError> {
    if pattern.is_empty() {
        return Ok(subject.is_empty());
    }

    let anchored_start = pattern.starts_with('^');
    let pattern = if anchored_start { &pattern[1..] } else { pattern };
    let anchored_end = has_end_anchor(pattern);
    let pattern = if anchored_end {
        &pattern[..pattern.len() - 1]
    } else {
        pattern
    };

    let compiled = compile(pattern)?;
    let subject = subject.as_bytes();

    if anchored_start {
        return Ok(try_match(subject, &compiled, anchored_end).is_some());
    }

    // Substring semantics: try every start offset, the empty tail included,
    // so `a*` and a bare `$` can still match at the very end.
    Ok((0..=subject.len())
        .any(|start| try_match(&subject[start..], &compiled, anchored_end).is_some()))
}

// A trailing `$` is an anchor only when unescaped. Escapes stack (`\\$` is a
// literal backslash and then an anchor), so what decides is whether an even
// number of backslashes sits in front of the `$`.
fn has_end_anchor(pattern: &str) -> bool {
    let Some((&b'$', rest)) = pattern.as_bytes().split_last() else {
        return false;
    };
    let backslashes = rest.iter().rev().take_while(|&&b| b == b'\\').count();
    backslashes % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_anchor_detection_respects_escapes() {
        assert!(has_end_anchor("a$"));
        assert!(has_end_anchor("$"));
        assert!(has_end_anchor(r"a\\$"));
        assert!(!has_end_anchor(r"a\$"));
        assert!(!has_end_anchor("a"));
        assert!(!has_end_anchor(""));
    }

    #[test]
    fn empty_pattern_is_decided_before_compilation() {
        assert_eq!(matches("", ""), Ok(true));
        assert_eq!(matches("x", ""), Ok(false));
    }

    #[test]
    fn anchors_are_stripped_only_at_the_pattern_edges() {
        // One leading caret is the anchor; a second one is a literal.
        assert_eq!(matches("^a", "^^a"), Ok(true));
        assert_eq!(matches("a", "^^a"), Ok(false));
    }

    #[test]
    fn compile_errors_surface_through_the_entry_point() {
        let cases: &[(&str, PatternError)] = &[
            ("[]", PatternError::EmptyBracket),
            ("[^]", PatternError::EmptyBracket),
            ("[ab", PatternError::UnterminatedBracket),
            ("()", PatternError::EmptyGroup),
            ("(ab", PatternError::UnterminatedGroup),
            ("a|", PatternError::EmptyAlternative),
            ("|a", PatternError::EmptyAlternative),
            (r"ab\", PatternError::DanglingEscape),
        ];
        for (pattern, expected) in cases.iter().cloned() {
            assert_eq!(
                matches("anything", pattern),
                Err(expected),
                "pattern={pattern:?}"
            );
        }
    }
}
