//! Builders for the markup an editor inserts into a formula text box.

use crate::formula::{
    normalize::{STACKED_CLOSE, STACKED_OPEN},
    scanner::PLACEHOLDER,
    Tag,
};

/// Characters that separate the terms of a reaction rather than belong to one.
pub const DEFAULT_OPERATORS: [char; 4] = ['+', '=', '→', '⇌'];

const STACK_PLACEHOLDER: char = '▯';

/// Wraps the selected text in `tag`.
///
/// Operators are kept outside the region: the region is closed before each
/// one and reopened after it. An empty selection produces an empty region
/// holding a placeholder so the caret has somewhere to go.
pub fn wrap_selection(tag: Tag, selected: &str, operators: &[char]) -> String {
    if selected.is_empty() {
        return format!("{}{PLACEHOLDER}{}", tag.open(), tag.close());
    }

    let mut markup = String::from(tag.open());
    for c in selected.chars() {
        if operators.contains(&c) {
            markup.push_str(tag.close());
            markup.push(c);
            markup.push_str(tag.open());
        } else {
            markup.push(c);
        }
    }
    markup.push_str(tag.close());
    markup
}

/// Builds a stacked superscript/subscript pair from a space-separated
/// selection, e.g. `"2- 4"` becomes a `2-` superscript over a `4` subscript.
///
/// Missing halves are filled with `▯` and operators are dropped.
pub fn stack(selected: &str, operators: &[char]) -> String {
    let mut selected = remove_template_literals(selected);
    if selected.is_empty() {
        selected.push(STACK_PLACEHOLDER);
    }
    if !selected.contains(' ') {
        selected.push(' ');
        selected.push(STACK_PLACEHOLDER);
    }

    let mut markup = format!("{STACKED_OPEN}{}", Tag::Sup.open());
    let mut in_subscript = false;
    for c in selected.chars() {
        if c == ' ' {
            if !in_subscript {
                markup.push_str(Tag::Sup.close());
                markup.push_str(Tag::Sub.open());
                in_subscript = true;
            }
        } else if !operators.contains(&c) {
            markup.push(c);
        }
    }
    markup.push_str(Tag::Sub.close());
    markup.push_str(STACKED_CLOSE);
    markup.push(' ');
    markup.push_str(PLACEHOLDER);
    markup
}

/// The text to insert for an operator entity such as `&rarr;`.
pub fn insert_operator(entity: &str) -> String {
    remove_template_literals(entity)
}

/// Removes `${...}` template placeholders.
pub fn remove_template_literals(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        output.push_str(&rest[..start]);
        rest = &rest[start + 2 + len + 1..];
    }
    output.push_str(rest);
    output
}
