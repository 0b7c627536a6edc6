//! Named character reference lookup table.
//!
//! [§ 13.5 Named character references](https://html.spec.whatwg.org/multipage/named-characters.html)
//!
//! The full table has 2,231 entries; this one carries the references that
//! show up in real pages often enough to matter for scraping.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Maps entity names (without the leading '&') to their replacement strings.
///
/// Names are stored WITH their trailing semicolon. A handful of legacy names
/// are also stored without it, because pages in the wild write `&amp` and
/// `&nbsp` bare and browsers accept them.
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Markup-significant
        ("amp;", "&"),
        ("amp", "&"), // Legacy (no semicolon)
        ("lt;", "<"),
        ("lt", "<"), // Legacy
        ("gt;", ">"),
        ("gt", ">"), // Legacy
        ("quot;", "\""),
        ("quot", "\""), // Legacy
        ("apos;", "'"),
        // Spaces
        ("nbsp;", "\u{00A0}"),
        ("nbsp", "\u{00A0}"), // Legacy
        ("ensp;", "\u{2002}"),
        ("emsp;", "\u{2003}"),
        ("thinsp;", "\u{2009}"),
        ("zwnj;", "\u{200C}"),
        ("zwj;", "\u{200D}"),
        ("shy;", "\u{00AD}"),
        // Punctuation and symbols
        ("copy;", "\u{00A9}"), // ©
        ("copy", "\u{00A9}"),  // Legacy
        ("reg;", "\u{00AE}"),  // ®
        ("reg", "\u{00AE}"),   // Legacy
        ("trade;", "\u{2122}"),
        ("mdash;", "\u{2014}"),
        ("ndash;", "\u{2013}"),
        ("hellip;", "\u{2026}"),
        ("bull;", "\u{2022}"),
        ("middot;", "\u{00B7}"),
        ("lsquo;", "\u{2018}"),
        ("rsquo;", "\u{2019}"),
        ("sbquo;", "\u{201A}"),
        ("ldquo;", "\u{201C}"),
        ("rdquo;", "\u{201D}"),
        ("bdquo;", "\u{201E}"),
        ("laquo;", "\u{00AB}"),
        ("raquo;", "\u{00BB}"),
        ("lsaquo;", "\u{2039}"),
        ("rsaquo;", "\u{203A}"),
        ("dagger;", "\u{2020}"),
        ("Dagger;", "\u{2021}"),
        ("permil;", "\u{2030}"),
        ("sect;", "\u{00A7}"),
        ("para;", "\u{00B6}"),
        ("iexcl;", "\u{00A1}"),
        ("iquest;", "\u{00BF}"),
        ("brvbar;", "\u{00A6}"),
        ("uml;", "\u{00A8}"),
        ("acute;", "\u{00B4}"),
        ("cedil;", "\u{00B8}"),
        ("macr;", "\u{00AF}"),
        ("ordf;", "\u{00AA}"),
        ("ordm;", "\u{00BA}"),
        ("prime;", "\u{2032}"),
        ("Prime;", "\u{2033}"),
        ("oline;", "\u{203E}"),
        ("hearts;", "\u{2665}"),
        ("spades;", "\u{2660}"),
        ("clubs;", "\u{2663}"),
        ("diams;", "\u{2666}"),
        ("check;", "\u{2713}"),
        ("star;", "\u{2606}"),
        // Currency
        ("cent;", "\u{00A2}"),
        ("pound;", "\u{00A3}"),
        ("euro;", "\u{20AC}"),
        ("yen;", "\u{00A5}"),
        ("curren;", "\u{00A4}"),
        // Math symbols
        ("times;", "\u{00D7}"),
        ("divide;", "\u{00F7}"),
        ("plusmn;", "\u{00B1}"),
        ("minus;", "\u{2212}"),
        ("ne;", "\u{2260}"),
        ("le;", "\u{2264}"),
        ("ge;", "\u{2265}"),
        ("asymp;", "\u{2248}"),
        ("equiv;", "\u{2261}"),
        ("infin;", "\u{221E}"),
        ("sum;", "\u{2211}"),
        ("prod;", "\u{220F}"),
        ("radic;", "\u{221A}"),
        ("part;", "\u{2202}"),
        ("int;", "\u{222B}"),
        ("deg;", "\u{00B0}"),
        ("micro;", "\u{00B5}"),
        ("not;", "\u{00AC}"),
        ("sup1;", "\u{00B9}"),
        ("sup2;", "\u{00B2}"),
        ("sup3;", "\u{00B3}"),
        ("frac12;", "\u{00BD}"),
        ("frac14;", "\u{00BC}"),
        ("frac34;", "\u{00BE}"),
        ("fnof;", "\u{0192}"),
        // Arrows
        ("larr;", "\u{2190}"),
        ("rarr;", "\u{2192}"),
        ("uarr;", "\u{2191}"),
        ("darr;", "\u{2193}"),
        ("harr;", "\u{2194}"),
        ("lArr;", "\u{21D0}"),
        ("rArr;", "\u{21D2}"),
        ("hArr;", "\u{21D4}"),
        // Greek letters
        ("Alpha;", "\u{0391}"),
        ("Beta;", "\u{0392}"),
        ("Gamma;", "\u{0393}"),
        ("Delta;", "\u{0394}"),
        ("Theta;", "\u{0398}"),
        ("Lambda;", "\u{039B}"),
        ("Pi;", "\u{03A0}"),
        ("Sigma;", "\u{03A3}"),
        ("Phi;", "\u{03A6}"),
        ("Omega;", "\u{03A9}"),
        ("alpha;", "\u{03B1}"),
        ("beta;", "\u{03B2}"),
        ("gamma;", "\u{03B3}"),
        ("delta;", "\u{03B4}"),
        ("epsilon;", "\u{03B5}"),
        ("theta;", "\u{03B8}"),
        ("lambda;", "\u{03BB}"),
        ("mu;", "\u{03BC}"),
        ("pi;", "\u{03C0}"),
        ("rho;", "\u{03C1}"),
        ("sigma;", "\u{03C3}"),
        ("tau;", "\u{03C4}"),
        ("phi;", "\u{03C6}"),
        ("omega;", "\u{03C9}"),
        // Accented Latin letters
        ("Agrave;", "\u{00C0}"),
        ("Aacute;", "\u{00C1}"),
        ("Acirc;", "\u{00C2}"),
        ("Atilde;", "\u{00C3}"),
        ("Auml;", "\u{00C4}"),
        ("Aring;", "\u{00C5}"),
        ("AElig;", "\u{00C6}"),
        ("agrave;", "\u{00E0}"),
        ("aacute;", "\u{00E1}"),
        ("acirc;", "\u{00E2}"),
        ("atilde;", "\u{00E3}"),
        ("auml;", "\u{00E4}"),
        ("aring;", "\u{00E5}"),
        ("aelig;", "\u{00E6}"),
        ("Egrave;", "\u{00C8}"),
        ("Eacute;", "\u{00C9}"),
        ("Ecirc;", "\u{00CA}"),
        ("Euml;", "\u{00CB}"),
        ("egrave;", "\u{00E8}"),
        ("eacute;", "\u{00E9}"),
        ("ecirc;", "\u{00EA}"),
        ("euml;", "\u{00EB}"),
        ("Igrave;", "\u{00CC}"),
        ("Iacute;", "\u{00CD}"),
        ("Icirc;", "\u{00CE}"),
        ("Iuml;", "\u{00CF}"),
        ("igrave;", "\u{00EC}"),
        ("iacute;", "\u{00ED}"),
        ("icirc;", "\u{00EE}"),
        ("iuml;", "\u{00EF}"),
        ("Ograve;", "\u{00D2}"),
        ("Oacute;", "\u{00D3}"),
        ("Ocirc;", "\u{00D4}"),
        ("Otilde;", "\u{00D5}"),
        ("Ouml;", "\u{00D6}"),
        ("Oslash;", "\u{00D8}"),
        ("ograve;", "\u{00F2}"),
        ("oacute;", "\u{00F3}"),
        ("ocirc;", "\u{00F4}"),
        ("otilde;", "\u{00F5}"),
        ("ouml;", "\u{00F6}"),
        ("oslash;", "\u{00F8}"),
        ("Ugrave;", "\u{00D9}"),
        ("Uacute;", "\u{00DA}"),
        ("Ucirc;", "\u{00DB}"),
        ("Uuml;", "\u{00DC}"),
        ("ugrave;", "\u{00F9}"),
        ("uacute;", "\u{00FA}"),
        ("ucirc;", "\u{00FB}"),
        ("uuml;", "\u{00FC}"),
        ("Yacute;", "\u{00DD}"),
        ("yacute;", "\u{00FD}"),
        ("yuml;", "\u{00FF}"),
        ("ntilde;", "\u{00F1}"),
        ("Ntilde;", "\u{00D1}"),
        ("ccedil;", "\u{00E7}"),
        ("Ccedil;", "\u{00C7}"),
        ("szlig;", "\u{00DF}"),
        ("ETH;", "\u{00D0}"),
        ("eth;", "\u{00F0}"),
        ("THORN;", "\u{00DE}"),
        ("thorn;", "\u{00FE}"),
        ("OElig;", "\u{0152}"),
        ("oelig;", "\u{0153}"),
        ("Scaron;", "\u{0160}"),
        ("scaron;", "\u{0161}"),
        // Ligatures that expand to more than one character
        ("fjlig;", "fj"),
    ])
});

/// Look up a named character reference.
///
/// Returns the replacement string if found.
/// The `name` should NOT include the leading '&'.
///
/// # Example
/// ```ignore
/// lookup_entity("amp;")  // Returns Some("&")
/// lookup_entity("amp")   // Returns Some("&") - legacy support
/// lookup_entity("xyz;")  // Returns None
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES.get(name).copied()
}

/// Check if any entity name starts with the given prefix.
///
/// The decoder uses this to decide whether to keep reading characters while
/// looking for the longest match.
#[must_use]
pub fn any_entity_has_prefix(prefix: &str) -> bool {
    NAMED_ENTITIES.keys().any(|name| name.starts_with(prefix))
}
