//! Tests for character reference decoding.

use wombat_html::entities::named_character_references::{any_entity_has_prefix, lookup_entity};
use wombat_html::{decode_attribute_value, decode_entities};

#[test]
fn test_lookup_common_entities() {
    assert_eq!(lookup_entity("amp;"), Some("&"));
    assert_eq!(lookup_entity("lt;"), Some("<"));
    assert_eq!(lookup_entity("gt;"), Some(">"));
    assert_eq!(lookup_entity("quot;"), Some("\""));
    assert_eq!(lookup_entity("nbsp;"), Some("\u{00A0}"));
    assert_eq!(lookup_entity("fjlig;"), Some("fj"));
}

#[test]
fn test_lookup_legacy_entities() {
    for name in ["amp", "lt", "gt", "quot", "nbsp", "copy", "reg"] {
        assert!(lookup_entity(name).is_some(), "legacy &{name} missing");
    }
    assert_eq!(lookup_entity("hellip"), None);
    assert_eq!(lookup_entity("notarealentity;"), None);
    assert_eq!(lookup_entity(""), None);
}

#[test]
fn test_prefix_matching() {
    assert!(any_entity_has_prefix("a"));
    assert!(any_entity_has_prefix("am"));
    assert!(any_entity_has_prefix("amp"));
    assert!(any_entity_has_prefix("amp;"));
    assert!(!any_entity_has_prefix("ampx"));
    assert!(!any_entity_has_prefix("xyz"));
}

#[test]
fn test_named_references() {
    assert_eq!(decode_entities("Tom &amp; Jerry"), "Tom & Jerry");
    assert_eq!(decode_entities("&lt;p&gt;"), "<p>");
    assert_eq!(decode_entities("&quot;hi&quot; &apos;there&apos;"), "\"hi\" 'there'");
    assert_eq!(decode_entities("caf&eacute; na&iuml;ve"), "caf\u{e9} na\u{ef}ve");
    assert_eq!(decode_entities("&hellip;&mdash;&euro;"), "\u{2026}\u{2014}\u{20ac}");
}

#[test]
fn test_legacy_references_without_semicolon() {
    assert_eq!(decode_entities("fish &amp chips"), "fish & chips");
    assert_eq!(decode_entities("&copy 2024"), "\u{a9} 2024");
    assert_eq!(decode_entities("a&nbsp;b&nbspc"), "a\u{a0}b\u{a0}c");
    assert_eq!(decode_entities("&lt3"), "<3");
    // Only legacy names may drop the semicolon.
    assert_eq!(decode_entities("&hellip and"), "&hellip and");
}

#[test]
fn test_longest_match_wins() {
    // "&amp;" beats "&amp".
    assert_eq!(decode_entities("&amp;;"), "&;");
    assert_eq!(decode_entities("&ampx"), "&x");
}

#[test]
fn test_unknown_references_pass_through() {
    assert_eq!(decode_entities("AT&T"), "AT&T");
    assert_eq!(decode_entities("&bogus;"), "&bogus;");
    assert_eq!(decode_entities("a & b"), "a & b");
    assert_eq!(decode_entities("&"), "&");
    assert_eq!(decode_entities("&&amp;&"), "&&&");
}

#[test]
fn test_decimal_references() {
    assert_eq!(decode_entities("&#38;"), "&");
    assert_eq!(decode_entities("&#169; 2024"), "\u{a9} 2024");
    assert_eq!(decode_entities("&#128512;"), "\u{1F600}");
    // The semicolon is optional.
    assert_eq!(decode_entities("&#65B"), "AB");
}

#[test]
fn test_hex_references() {
    assert_eq!(decode_entities("&#x26;"), "&");
    assert_eq!(decode_entities("&#X26;"), "&");
    assert_eq!(decode_entities("&#x2014;"), "\u{2014}");
    assert_eq!(decode_entities("&#x41g"), "Ag");
}

#[test]
fn test_numeric_without_digits_is_literal() {
    assert_eq!(decode_entities("&#;"), "&#;");
    assert_eq!(decode_entities("&#x;"), "&#x;");
    assert_eq!(decode_entities("&#"), "&#");
    assert_eq!(decode_entities("&#xyz"), "&#xyz");
}

#[test]
fn test_invalid_code_points_become_replacement_character() {
    assert_eq!(decode_entities("&#0;"), "\u{FFFD}");
    assert_eq!(decode_entities("&#xD800;"), "\u{FFFD}");
    assert_eq!(decode_entities("&#x110000;"), "\u{FFFD}");
    assert_eq!(decode_entities("&#99999999999999999999999;"), "\u{FFFD}");
    assert_eq!(decode_entities("&#xFFFFFFFFFFFFFFFF;"), "\u{FFFD}");
}

#[test]
fn test_c1_controls_use_windows_1252() {
    assert_eq!(decode_entities("&#128;"), "\u{20AC}");
    assert_eq!(decode_entities("&#x93;quoted&#x94;"), "\u{201C}quoted\u{201D}");
    assert_eq!(decode_entities("&#x99;"), "\u{2122}");
    // Holes in the table keep the code point.
    assert_eq!(decode_entities("&#x81;"), "\u{81}");
}

#[test]
fn test_decoding_is_single_pass() {
    assert_eq!(decode_entities("&amp;amp;"), "&amp;");
    assert_eq!(decode_entities("&amp;lt;"), "&lt;");
}

#[test]
fn test_entity_free_input_is_unchanged() {
    for input in ["", "plain text", "日本語 ü", "semi;colons # and x26"] {
        assert_eq!(decode_entities(input), input);
        assert_eq!(decode_attribute_value(input), input);
    }
}

#[test]
fn test_attribute_values_keep_ambiguous_legacy_references() {
    assert_eq!(decode_attribute_value("/s?a=1&copy=2"), "/s?a=1&copy=2");
    assert_eq!(decode_attribute_value("&ampx"), "&ampx");
    assert_eq!(decode_attribute_value("&copy 2024"), "\u{a9} 2024");
    assert_eq!(decode_attribute_value("&amp;x"), "&x");
    assert_eq!(decode_attribute_value("x=1&amp;y=2"), "x=1&y=2");
    assert_eq!(decode_attribute_value("Tom &amp; Jerry"), "Tom & Jerry");
}
