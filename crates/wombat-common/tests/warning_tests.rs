//! Tests for deduplicated warnings.

use wombat_common::WarningLog;

#[test]
fn test_warn_once_records_and_clears() {
    let mut log = WarningLog::new();
    assert!(log.is_empty());
    assert!(!log.has_warned("Test", "unterminated comment"));

    assert!(log.warn_once("Test", "unterminated comment", 3));
    assert!(!log.warn_once("Test", "unterminated comment", 3));
    assert!(log.has_warned("Test", "unterminated comment"));
    assert_eq!(log.len(), 1);

    // Same message under another component is a different warning.
    assert!(!log.has_warned("Other", "unterminated comment"));

    log.clear();
    assert!(!log.has_warned("Test", "unterminated comment"));
    assert!(log.is_empty());
}

#[test]
fn test_position_is_not_part_of_the_key() {
    let mut log = WarningLog::new();
    for position in 0..1_000 {
        let _ = log.warn_once("HTML Tokenizer", "unterminated comment", position);
    }
    assert_eq!(log.len(), 1);
}

#[test]
fn test_logs_are_independent() {
    let mut first = WarningLog::new();
    let _ = first.warn_once("HTML Parser", "unmatched end tag </span> ignored", 1);

    let mut second = WarningLog::new();
    assert!(!second.has_warned("HTML Parser", "unmatched end tag </span> ignored"));
    assert!(second.warn_once("HTML Parser", "unmatched end tag </span> ignored", 1));
}
