use std::iter::Peekable;
use std::str::Bytes;

use crate::regex::ast::{BracketMember, GroupType, Pattern, Quantifier, Token, TokenKind};
use crate::regex::error::PatternError;

pub fn compile(pattern: &str) -> Result<Pattern, PatternError> {
    let mut bytes = pattern.bytes().peekable();
    compile_alternative(&mut bytes, false)
}

// Compiles one alternative in a single left-to-right scan. The scan stops at
// the end of input, at a `|` (whose right side becomes the `alternative`
// chain), or, inside a group, at the terminating `)`. Group bodies recurse
// on the same iterator, so a nested call consumes its own `)` before handing
// the scan back to the outer one.
fn compile_alternative(
    bytes: &mut Peekable<Bytes<'_>>,
    in_group: bool,
) -> Result<Pattern, PatternError> {
    let mut tokens = Vec::new();

    loop {
        let Some(b) = bytes.next() else {
            if in_group {
                return Err(PatternError::UnterminatedGroup);
            }
            return Ok(Pattern {
                tokens,
                alternative: None,
            });
        };

        let kind = match b {
            b')' if in_group => {
                return Ok(Pattern {
                    tokens,
                    alternative: None,
                });
            }
            b'|' => {
                if tokens.is_empty() {
                    return Err(PatternError::EmptyAlternative);
                }
                let alternative = compile_alternative(bytes, in_group)?;
                if alternative.is_empty() {
                    return Err(PatternError::EmptyAlternative);
                }
                return Ok(Pattern {
                    tokens,
                    alternative: Some(Box::new(alternative)),
                });
            }
            b'\\' => {
                let escaped = bytes.next().ok_or(PatternError::DanglingEscape)?;
                TokenKind::EscapeClass(escaped)
            }
            b'(' => {
                let inner = compile_alternative(bytes, true)?;
                if inner.is_empty() {
                    return Err(PatternError::EmptyGroup);
                }
                TokenKind::Group(Box::new(inner))
            }
            b'[' => compile_bracket(bytes)?,
            b'.' => TokenKind::Wildcard,
            // Anything else is literal, including `)` with no open group and
            // `*`/`+` with no preceding construct.
            other => TokenKind::Literal(other),
        };

        let quantifier = match bytes.peek() {
            Some(&b'*') => {
                bytes.next();
                Quantifier::ZeroOrMore
            }
            Some(&b'+') => {
                bytes.next();
                Quantifier::OneOrMore
            }
            _ => Quantifier::One,
        };

        tokens.push(Token { kind, quantifier });
    }
}

// Collects bracket members up to the closing `]`. Members are literal bytes
// or escapes; `[` inside the brackets is an ordinary member, not nesting.
fn compile_bracket(bytes: &mut Peekable<Bytes<'_>>) -> Result<TokenKind, PatternError> {
    let mut group_type = GroupType::Positive;
    if bytes.peek() == Some(&b'^') {
        group_type = GroupType::Negative;
        bytes.next();
    }

    let mut members = Vec::new();
    loop {
        match bytes.next() {
            None => return Err(PatternError::UnterminatedBracket),
            Some(b']') => break,
            Some(b'\\') => {
                let escaped = bytes.next().ok_or(PatternError::DanglingEscape)?;
                members.push(BracketMember::EscapeClass(escaped));
            }
            Some(other) => members.push(BracketMember::Literal(other)),
        }
    }

    if members.is_empty() {
        return Err(PatternError::EmptyBracket);
    }
    Ok(TokenKind::Bracket(members, group_type))
}
