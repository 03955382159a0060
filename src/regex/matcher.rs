use crate::regex::ast::{Pattern, Quantifier, Token, TokenKind};
use crate::regex::evaluator::evaluates;

// Tries `pattern`'s alternatives in source order against the front of
// `subject`. The first alternative that consumes successfully wins; later
// ones are not attempted. Returns the number of bytes consumed.
pub fn try_match(subject: &[u8], pattern: &Pattern, anchored_end: bool) -> Option<usize> {
    pattern
        .alternatives()
        .find_map(|alt| match_tokens(subject, &alt.tokens, anchored_end))
}

// Walks one alternative's tokens left to right, consuming subject bytes as
// each token's quantifier demands. No backtracking: once a token has
// consumed, the walk never revisits it.
fn match_tokens(subject: &[u8], tokens: &[Token], anchored_end: bool) -> Option<usize> {
    let mut pos = 0;

    for (i, token) in tokens.iter().enumerate() {
        let next = tokens.get(i + 1);
        pos = match token.quantifier {
            Quantifier::One => consume_once(subject, pos, &token.kind)?,
            Quantifier::OneOrMore => {
                let after_first = consume_once(subject, pos, &token.kind)?;
                consume_greedy(subject, after_first, &token.kind, next)
            }
            Quantifier::ZeroOrMore => consume_greedy(subject, pos, &token.kind, next),
        };
    }

    if anchored_end && pos != subject.len() {
        return None;
    }
    Some(pos)
}

// One consumption of `kind` at `pos`: a single byte for character tests, a
// whole inner-pattern match for groups. The inner match never carries the
// end anchor; that check belongs to the top of the token walk.
fn consume_once(subject: &[u8], pos: usize, kind: &TokenKind) -> Option<usize> {
    match kind {
        TokenKind::Group(inner) => try_match(&subject[pos..], inner, false).map(|len| pos + len),
        kind => {
            let byte = *subject.get(pos)?;
            evaluates(kind, byte).then_some(pos + 1)
        }
    }
}

// Greedy consumption with a lookahead of one: stop as soon as the following
// token could match at the current position, so a greedy class cannot
// swallow a byte the next token needs (`d.+g` against `dog` must leave the
// final `g` alone). A repetition that consumes nothing also stops the loop,
// or a zero-width group under `*` would spin forever.
fn consume_greedy(subject: &[u8], mut pos: usize, kind: &TokenKind, next: Option<&Token>) -> usize {
    loop {
        if next_token_claims(subject, pos, next) {
            return pos;
        }
        match consume_once(subject, pos, kind) {
            Some(advanced) if advanced > pos => pos = advanced,
            _ => return pos,
        }
    }
}

// The lookahead is a single-character test; a following group never claims
// the position (the evaluator reports false for group tokens).
fn next_token_claims(subject: &[u8], pos: usize, next: Option<&Token>) -> bool {
    match (next, subject.get(pos)) {
        (Some(token), Some(&byte)) => evaluates(&token.kind, byte),
        _ => false,
    }
}
