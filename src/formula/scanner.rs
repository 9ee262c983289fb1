use std::fmt;

use itertools::Itertools;

use super::Tag;

/// Entity the editor inserts to keep an empty region addressable by the caret.
pub const PLACEHOLDER: &str = "&shy;";
/// The same placeholder once the entity has been decoded.
pub const SOFT_HYPHEN: char = '\u{AD}';

const TAGS: [(&str, Token<'static>); 4] = [
    ("<sub>", Token::Open(Tag::Sub)),
    ("</sub>", Token::Close(Tag::Sub)),
    ("<sup>", Token::Open(Tag::Sup)),
    ("</sup>", Token::Close(Tag::Sup)),
];

#[derive(Debug, Clone)]
pub struct MarkupScanner<'a> {
    source: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Open(Tag),
    Close(Tag),
    Placeholder(&'a str),
    Char(char),
}

impl<'a> MarkupScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        MarkupScanner { source }
    }
}

impl<'a> Iterator for MarkupScanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let next = self.source.chars().next()?;

        for (text, token) in TAGS {
            if self.source.starts_with(text) {
                self.source = &self.source[text.len()..];
                return Some(token);
            }
        }

        if self.source.starts_with(PLACEHOLDER) {
            let (placeholder, rest) = self.source.split_at(PLACEHOLDER.len());
            self.source = rest;
            return Some(Token::Placeholder(placeholder));
        }

        let (head, rest) = self.source.split_at(next.len_utf8());
        self.source = rest;
        if next == SOFT_HYPHEN {
            Some(Token::Placeholder(head))
        } else {
            Some(Token::Char(next))
        }
    }
}

impl Token<'_> {
    /// Whitespace and placeholders carry no meaning in a formula.
    pub fn is_blank(&self) -> bool {
        match self {
            Token::Placeholder(_) => true,
            Token::Char(c) => c.is_whitespace(),
            _ => false,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Open(tag) => write!(f, "{}", tag.open()),
            Token::Close(tag) => write!(f, "{}", tag.close()),
            Token::Placeholder(text) => write!(f, "{text}"),
            Token::Char(c) => write!(f, "{c}"),
        }
    }
}

/// Writes tokens back out as markup.
pub fn render<'a>(tokens: impl IntoIterator<Item = Token<'a>>) -> String {
    tokens.into_iter().join("")
}
