//! Fixed element tables used by tree construction.
//!
//! All lookups compare tag names ASCII case-insensitively, so `<LI>` and
//! `<li>` follow the same rules.

/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// Void elements can never have children. A start tag for one is appended
/// to the current node but never becomes the current node.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Open element on the left is closed when a start tag from the list on the
/// right arrives while it is the current node.
const IMPLICIT_CLOSE_RULES: &[(&str, &[&str])] = &[
    ("li", &["li"]),
    ("p", &["p", "div", "ul", "ol"]),
    ("dt", &["dt", "dd"]),
    ("dd", &["dt", "dd"]),
    ("thead", &["tbody", "tfoot"]),
    ("tbody", &["tbody", "tfoot"]),
    ("tfoot", &["tbody"]),
    ("tr", &["tr"]),
    ("td", &["td", "th"]),
    ("th", &["td", "th"]),
    ("option", &["option", "optgroup"]),
];

/// Returns true if `tag_name` is a void element.
#[must_use]
pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(tag_name))
}

/// Returns true if an open `current` element must be closed before a start
/// tag named `incoming` is inserted.
///
/// ```
/// use wombat_html::parser::is_implicitly_closed_by;
///
/// assert!(is_implicitly_closed_by("p", "div"));
/// assert!(is_implicitly_closed_by("LI", "li"));
/// assert!(!is_implicitly_closed_by("div", "p"));
/// ```
#[must_use]
pub fn is_implicitly_closed_by(current: &str, incoming: &str) -> bool {
    IMPLICIT_CLOSE_RULES
        .iter()
        .find(|(open, _)| open.eq_ignore_ascii_case(current))
        .is_some_and(|(_, closers)| {
            closers
                .iter()
                .any(|closer| closer.eq_ignore_ascii_case(incoming))
        })
}
