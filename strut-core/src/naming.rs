//! Identifier helpers for generated code.
//!
//! Every function here is pure; outputs are valid identifier fragments for
//! the schema names the builder feeds in.

const DIGIT_NAMES: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

/// Spell `n` digit by digit: `0` → `Zero`, `23` → `TwoThree`.
///
/// Used where a numeric disambiguator has to become part of an identifier.
pub fn english_number(n: u64) -> String {
    n.to_string()
        .bytes()
        .map(|digit| DIGIT_NAMES[usize::from(digit - b'0')])
        .collect()
}

/// Convert a `lower_snake` name to `lowerCamel`.
///
/// The first piece keeps its spelling with its first letter lowered; later
/// pieces are capitalized. A name whose first piece is empty or does not start
/// with a letter (`_a`, `2fa`) gets an `x` prefix: `_leading_camel` →
/// `xLeadingCamel`.
pub fn low_camel_name(name: &str) -> String {
    let mut pieces = name.split('_');
    let first = pieces.next().unwrap_or_default();

    let mut out = String::with_capacity(name.len() + 1);
    if !first.starts_with(|c: char| c.is_alphabetic()) {
        out.push('x');
    }
    let mut chars = first.chars();
    if let Some(c) = chars.next() {
        out.extend(c.to_lowercase());
        out.push_str(chars.as_str());
    }
    for piece in pieces {
        out.push_str(&capitalize(piece));
    }
    out
}

/// Protobuf-style `CamelCase`.
///
/// A leading `_` becomes `X`, an underscore followed by a lowercase letter is
/// dropped and the letter raised, digits are copied as-is. `user_id` →
/// `UserId`, `_a` → `XA`, `field_2` → `Field_2`.
pub fn camel_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 1);
    let mut i = 0;

    if chars.first() == Some(&'_') {
        out.push('X');
        i = 1;
    }
    while i < chars.len() {
        let c = chars[i];
        i += 1;
        if c == '_' && chars.get(i).is_some_and(|next| next.is_ascii_lowercase()) {
            continue;
        }
        if c.is_ascii_digit() {
            out.push(c);
            continue;
        }
        out.push(c.to_ascii_uppercase());
        while let Some(&next) = chars.get(i) {
            if !next.is_ascii_lowercase() {
                break;
            }
            out.push(next);
            i += 1;
        }
    }
    out
}

/// Convert a name to `lower_snake`. Already-snake input is returned unchanged.
///
/// `userId` → `user_id`, `HTTPCode` → `httpcode`.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c.is_uppercase() {
            if prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
