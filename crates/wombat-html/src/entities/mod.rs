//! HTML character reference decoding.
//!
//! [§ 13.2.5.72 Character reference state](https://html.spec.whatwg.org/multipage/parsing.html#character-reference-state)
//!
//! The tokenizer hands text and attribute values over raw. The tree builder
//! runs them through [`decode_entities`] or [`decode_attribute_value`] before
//! they land in the tree. Comment bodies are never decoded.
//!
//! Decoding is lenient: anything that does not form a known reference is
//! copied through unchanged, so decoding never fails.

/// Named character reference lookup table.
pub mod named_character_references;

use named_character_references::{any_entity_has_prefix, lookup_entity};

/// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
///
/// Replacements for code points 0x80..=0x9F, which legacy pages use to mean
/// the Windows-1252 character at that position. `None` entries are left
/// as-is.
const WINDOWS_1252_C1: [Option<char>; 32] = [
    Some('\u{20AC}'), // 0x80 €
    None,             // 0x81
    Some('\u{201A}'), // 0x82 ‚
    Some('\u{0192}'), // 0x83 ƒ
    Some('\u{201E}'), // 0x84 „
    Some('\u{2026}'), // 0x85 …
    Some('\u{2020}'), // 0x86 †
    Some('\u{2021}'), // 0x87 ‡
    Some('\u{02C6}'), // 0x88 ˆ
    Some('\u{2030}'), // 0x89 ‰
    Some('\u{0160}'), // 0x8A Š
    Some('\u{2039}'), // 0x8B ‹
    Some('\u{0152}'), // 0x8C Œ
    None,             // 0x8D
    Some('\u{017D}'), // 0x8E Ž
    None,             // 0x8F
    None,             // 0x90
    Some('\u{2018}'), // 0x91 '
    Some('\u{2019}'), // 0x92 '
    Some('\u{201C}'), // 0x93 "
    Some('\u{201D}'), // 0x94 "
    Some('\u{2022}'), // 0x95 •
    Some('\u{2013}'), // 0x96 –
    Some('\u{2014}'), // 0x97 —
    Some('\u{02DC}'), // 0x98 ˜
    Some('\u{2122}'), // 0x99 ™
    Some('\u{0161}'), // 0x9A š
    Some('\u{203A}'), // 0x9B ›
    Some('\u{0153}'), // 0x9C œ
    None,             // 0x9D
    Some('\u{017E}'), // 0x9E ž
    Some('\u{0178}'), // 0x9F Ÿ
];

/// Decode every named and numeric character reference in `input`.
///
/// ```
/// use wombat_html::entities::decode_entities;
///
/// assert_eq!(decode_entities("Tom &amp; Jerry"), "Tom & Jerry");
/// assert_eq!(decode_entities("&#169; 2024 &#x2014; &lt;b&gt;"), "\u{a9} 2024 \u{2014} <b>");
/// assert_eq!(decode_entities("AT&T"), "AT&T");
/// ```
#[must_use]
pub fn decode_entities(input: &str) -> String {
    decode(input, false)
}

/// Decode an attribute value.
///
/// Same as [`decode_entities`], except that a legacy reference written
/// without its `;` and directly followed by `=` or an alphanumeric is left
/// alone, so query strings like `?a=1&copy=2` survive intact.
#[must_use]
pub fn decode_attribute_value(input: &str) -> String {
    decode(input, true)
}

fn decode(input: &str, in_attribute: bool) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    let mut output = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        output.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        match decode_reference(after, in_attribute, &mut output) {
            Some(consumed) => rest = &after[consumed..],
            None => {
                output.push('&');
                rest = after;
            }
        }
    }
    output.push_str(rest);
    output
}

/// Decode one reference starting just after its `&`.
///
/// On success the replacement is appended to `output` and the number of
/// bytes consumed (not counting the `&`) is returned.
fn decode_reference(after: &str, in_attribute: bool, output: &mut String) -> Option<usize> {
    if let Some(numeric) = after.strip_prefix('#') {
        return decode_numeric(numeric, output).map(|consumed| consumed + 1);
    }
    decode_named(after, in_attribute, output)
}

/// [§ 13.2.5.73 Named character reference state](https://html.spec.whatwg.org/multipage/parsing.html#named-character-reference-state)
///
/// "Consume the maximum number of characters possible, where the consumed
/// characters are one of the identifiers in the first column of the named
/// character references table."
fn decode_named(after: &str, in_attribute: bool, output: &mut String) -> Option<usize> {
    let mut longest_match: Option<(usize, &'static str)> = None;

    for (i, b) in after.bytes().enumerate() {
        if !(b.is_ascii_alphanumeric() || b == b';') {
            break;
        }
        // Only ASCII has been seen so far, so this slice is on a boundary.
        let name = &after[..=i];
        if let Some(replacement) = lookup_entity(name) {
            longest_match = Some((i + 1, replacement));
        }
        if b == b';' || !any_entity_has_prefix(name) {
            break;
        }
    }

    let (match_len, replacement) = longest_match?;

    // "If the character reference was consumed as part of an attribute, and
    // the last character matched is not a U+003B SEMICOLON character (;), and
    // the next input character is either a U+003D EQUALS SIGN character (=)
    // or an ASCII alphanumeric, then, for historical reasons, flush code
    // points consumed as a character reference."
    if in_attribute && !after[..match_len].ends_with(';') {
        let next = after.as_bytes().get(match_len).copied();
        if next.is_some_and(|b| b == b'=' || b.is_ascii_alphanumeric()) {
            return None;
        }
    }

    output.push_str(replacement);
    Some(match_len)
}

/// [§ 13.2.5.75 Numeric character reference state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-state)
///
/// `numeric` starts just after `&#`. Returns bytes consumed from there.
fn decode_numeric(numeric: &str, output: &mut String) -> Option<usize> {
    let (digits_start, radix) = match numeric.as_bytes().first() {
        Some(b'x' | b'X') => (1, 16),
        _ => (0, 10),
    };

    let digits: &str = &numeric[digits_start..];
    let digit_count = digits.bytes().take_while(|b| char::from(*b).is_digit(radix)).count();
    // "&#;" and "&#x;" are not references.
    if digit_count == 0 {
        return None;
    }

    // Saturates on overflow, which lands out of range below.
    let code_point = digits[..digit_count]
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0u32, |acc, d| acc.saturating_mul(radix).saturating_add(d));

    let mut consumed = digits_start + digit_count;
    if numeric.as_bytes().get(consumed) == Some(&b';') {
        consumed += 1;
    }

    output.push(numeric_replacement(code_point));
    Some(consumed)
}

/// [§ 13.2.5.80 Numeric character reference end state](https://html.spec.whatwg.org/multipage/parsing.html#numeric-character-reference-end-state)
fn numeric_replacement(code_point: u32) -> char {
    match code_point {
        // "If the number is 0x00, then this is a null-character-reference
        // parse error. Set the character reference code to 0xFFFD."
        0 => char::REPLACEMENT_CHARACTER,
        0x80..=0x9F => usize::try_from(code_point - 0x80)
            .ok()
            .and_then(|index| WINDOWS_1252_C1.get(index).copied().flatten())
            .or_else(|| char::from_u32(code_point))
            .unwrap_or(char::REPLACEMENT_CHARACTER),
        // Surrogates and values past U+10FFFF have no char.
        _ => char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER),
    }
}
