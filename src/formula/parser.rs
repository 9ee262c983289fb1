use log::trace;

use crate::elements::ElementLookup;

use super::{
    scanner::{MarkupScanner, Token},
    Error, FormulaPair, Tag,
};

/// Splits normalized markup into element/subscript pairs, validating every
/// element against `elements`.
///
/// Pairs keep the order the elements were written in and repeated elements
/// are not merged. Whitespace and placeholders are ignored.
pub fn tokenize<E>(input: &str, elements: &E) -> Result<Vec<FormulaPair>, Error>
where
    E: ElementLookup + ?Sized,
{
    let has_text = MarkupScanner::new(input)
        .any(|token| matches!(token, Token::Char(c) if !c.is_whitespace()));
    if !has_text {
        return Err(Error::EmptyInput);
    }

    let mut tokens = MarkupScanner::new(input)
        .filter(|token| !token.is_blank())
        .peekable();

    let mut pairs = Vec::new();
    while let Some(token) = tokens.next() {
        let first = match token {
            Token::Char(c) => c,
            Token::Open(Tag::Sub) => return Err(Error::SubscriptWithoutElement),
            Token::Open(Tag::Sup) => {
                read_region(&mut tokens, Tag::Sup)?;
                continue;
            }
            Token::Close(tag) => return Err(Error::UnmatchedClosingTag(tag)),
            Token::Placeholder(_) => continue,
        };

        let mut element = String::from(first);
        while let Some(Token::Char(c)) =
            tokens.next_if(|token| matches!(token, Token::Char(c) if c.is_lowercase()))
        {
            element.push(c);
        }

        if !elements.has(&element) {
            return Err(Error::UnknownElement(element));
        }

        let mut count = String::new();
        while let Some(&Token::Open(tag)) = tokens.peek() {
            tokens.next();
            let text = read_region(&mut tokens, tag)?;
            if tag == Tag::Sub {
                count.push_str(&text);
            }
        }
        if count.is_empty() {
            count.push('1');
        }

        trace!("element {element} with count {count}");
        pairs.push(FormulaPair { element, count });
    }

    if pairs.is_empty() {
        return Err(Error::EmptyInput);
    }

    Ok(pairs)
}

/// Reads the text of a region whose opener has just been consumed, up to and
/// including its closer. Regions of the other tag nested inside are skipped.
fn read_region<'a, I>(tokens: &mut I, tag: Tag) -> Result<String, Error>
where
    I: Iterator<Item = Token<'a>>,
{
    let mut text = String::new();
    while let Some(token) = tokens.next() {
        match token {
            Token::Close(closing) if closing == tag => return Ok(text),
            Token::Close(closing) => return Err(Error::UnmatchedClosingTag(closing)),
            Token::Open(opening) if opening == tag => return Err(Error::UnclosedTag(tag)),
            Token::Open(opening) => {
                read_region(tokens, opening)?;
            }
            Token::Char(c) => text.push(c),
            Token::Placeholder(_) => {}
        }
    }
    Err(Error::UnclosedTag(tag))
}

/// Checks that every `<sub>` and `<sup>` is closed, in order, before the end
/// of the input and that no closer appears without an opener.
pub fn check_tags(input: &str) -> Result<(), Error> {
    let mut open = Vec::new();
    for token in MarkupScanner::new(input) {
        match token {
            Token::Open(tag) if open.contains(&tag) => return Err(Error::UnclosedTag(tag)),
            Token::Open(tag) => open.push(tag),
            Token::Close(tag) => match open.last() {
                Some(&last) if last == tag => {
                    open.pop();
                }
                Some(&last) if open.contains(&tag) => return Err(Error::UnclosedTag(last)),
                _ => return Err(Error::UnmatchedClosingTag(tag)),
            },
            _ => {}
        }
    }

    match open.first() {
        Some(&tag) => Err(Error::UnclosedTag(tag)),
        None => Ok(()),
    }
}
