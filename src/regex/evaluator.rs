use crate::regex::ast::{BracketMember, GroupType, TokenKind};

// Decides whether one subject byte satisfies a single-character test. Pure
// predicate: no state, no side effects. Callers never invoke it past the end
// of the subject.
pub fn evaluates(kind: &TokenKind, byte: u8) -> bool {
    match kind {
        TokenKind::Wildcard => true,
        TokenKind::Literal(l) => byte == *l,
        TokenKind::EscapeClass(class) => escape_class_matches(*class, byte),
        TokenKind::Bracket(members, group_type) => {
            let found = members.iter().any(|m| member_matches(m, byte));
            match group_type {
                GroupType::Positive => found,
                GroupType::Negative => !found,
            }
        }
        // Groups are matched structurally by the matcher, never per character.
        TokenKind::Group(_) => false,
    }
}

// \d and \w are the only special classes; escaping any other character
// neutralizes it, including the backslash itself.
fn escape_class_matches(class: u8, byte: u8) -> bool {
    match class {
        b'd' => byte.is_ascii_digit(),
        b'w' => byte.is_ascii_alphabetic(),
        other => byte == other,
    }
}

fn member_matches(member: &BracketMember, byte: u8) -> bool {
    match member {
        BracketMember::Literal(l) => byte == *l,
        BracketMember::EscapeClass(class) => escape_class_matches(*class, byte),
    }
}
