use itertools::Itertools;
use log::debug;

use super::{
    scanner::{render, MarkupScanner, Token},
    Tag,
};

/// Removes every superscript span from `input` and sums the charges they
/// annotate.
///
/// A `<sup>` without a closer swallows the rest of the input as charge text,
/// so callers are expected to check tag balance first.
pub fn extract_charge(input: &str) -> (String, i64) {
    let mut remaining = Vec::new();
    let mut charge = 0i64;

    let mut scanner = MarkupScanner::new(input);
    while let Some(token) = scanner.next() {
        if token != Token::Open(Tag::Sup) {
            remaining.push(token);
            continue;
        }

        let text = scanner
            .by_ref()
            .take_while(|token| *token != Token::Close(Tag::Sup))
            .filter(|token| !token.is_blank())
            .join("");
        let value = charge_value(&text);
        debug!("superscript {text:?} contributes {value}");
        charge = charge.saturating_add(value);
    }

    (render(remaining), charge)
}

/// Interprets one superscript annotation.
///
/// A bare sign means one unit. A trailing `-` negates the magnitude written
/// before it (`2-` is -2). Text without a leading integer counts as zero.
pub fn charge_value(text: &str) -> i64 {
    match text {
        "-" => -1,
        "+" => 1,
        _ if text.ends_with('-') => leading_integer(text).map_or(0, i64::saturating_neg),
        _ => leading_integer(text).unwrap_or(0),
    }
}

fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let sign_len = usize::from(text.starts_with(['+', '-']));
    let digits_len = text[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len() - sign_len);
    text[..sign_len + digits_len].parse().ok()
}
