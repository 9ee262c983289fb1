use log::trace;

use super::{
    scanner::{render, MarkupScanner, Token},
    Tag,
};

pub const STACKED_OPEN: &str = "<span class=\"stacked\">";
pub const STACKED_CLOSE: &str = "</span>";

/// Rewrites editor markup into the canonical form the later stages expect.
///
/// Stacked spans are flattened, adjacent runs of the same tag are merged and
/// whitespace and placeholders are dropped from subscripts. Tag balance is
/// not checked here.
pub fn normalize(input: &str) -> String {
    let mut current = normalize_once(input);
    // Stripping a subscript can join the text around it into a new tag.
    loop {
        let next = normalize_once(&current);
        if next == current {
            trace!("normalized {input:?} to {current:?}");
            return current;
        }
        current = next;
    }
}

fn normalize_once(input: &str) -> String {
    let unstacked = unstack(input);

    let mut tokens: Vec<Token> = Vec::new();
    let mut in_subscript = false;
    for token in MarkupScanner::new(&unstacked) {
        match token {
            Token::Open(tag) if tokens.last() == Some(&Token::Close(tag)) => {
                tokens.pop();
            }
            _ if in_subscript && token.is_blank() => continue,
            _ => tokens.push(token),
        }

        match token {
            Token::Open(Tag::Sub) => in_subscript = true,
            Token::Close(Tag::Sub) => in_subscript = false,
            _ => {}
        }
    }

    render(tokens)
}

/// Removes `<span class="stacked">` wrappers, keeping what they contain.
pub fn unstack(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find(STACKED_OPEN) {
        output.push_str(&rest[..start]);
        rest = &rest[start + STACKED_OPEN.len()..];
        if let Some(end) = rest.find(STACKED_CLOSE) {
            output.push_str(&rest[..end]);
            rest = &rest[end + STACKED_CLOSE.len()..];
        }
    }
    output.push_str(rest);
    output
}
