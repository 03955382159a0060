#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupType {
    Positive, // [abc]
    Negative, // [^abc]
}

// A single member of a bracket expression. Members are character tests only:
// they carry no quantifier and cannot nest brackets or groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BracketMember {
    Literal(u8),
    EscapeClass(u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Literal(u8),
    Wildcard,                               // .
    EscapeClass(u8),                        // \d, \w, \<literal>
    Bracket(Vec<BracketMember>, GroupType), // [...] or [^...]
    Group(Box<Pattern>),                    // (...)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    One,
    OneOrMore,  // +
    ZeroOrMore, // *
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub quantifier: Quantifier,
}

// One alternative: an ordered token sequence, linked to the next |-separated
// option at the same nesting level. The chain is owned and non-cyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub tokens: Vec<Token>,
    pub alternative: Option<Box<Pattern>>,
}

impl Pattern {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.alternative.is_none()
    }

    // Walks this alternative and every chained one in source order.
    pub fn alternatives(&self) -> impl Iterator<Item = &Pattern> {
        std::iter::successors(Some(self), |p| p.alternative.as_deref())
    }
}
