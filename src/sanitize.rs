//! String sanitizers
//!
//! Pure `&str -> String` transforms behind the validator's sanitizing
//! operations. They never fail and never record errors; the validator applies
//! them to the single text or to each list element.
//!
//! # Example
//!
//! ```rust
//! use fieldcheck::sanitize::*;
//!
//! assert_eq!(trim_whitespace("\t hi \n"), "hi");
//! assert_eq!(collapse_whitespace("a  \t b"), "a b");
//! assert_eq!(escape_html("<a href=\"x\">"), "&lt;a href=&quot;x&quot;&gt;");
//! assert_eq!(trim_slashes("//srv/www/"), "srv/www");
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Characters stripped by [`trim_whitespace`].
pub const TRIMMED_CHARS: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\n\x0B\x0C\r ]{2,}").expect("static pattern"));

/// Strip leading and trailing whitespace.
///
/// Whitespace here is space, tab, line feed, carriage return, NUL and
/// vertical tab. Other Unicode spaces (e.g. U+00A0) are kept.
///
/// ```rust
/// use fieldcheck::sanitize::trim_whitespace;
///
/// assert_eq!(trim_whitespace("\0 x \x0B"), "x");
/// assert_eq!(trim_whitespace("\u{a0}x"), "\u{a0}x");
/// ```
pub fn trim_whitespace(input: &str) -> String {
    input.trim_matches(&TRIMMED_CHARS[..]).to_string()
}

/// Collapse every run of two or more ASCII whitespace characters into a
/// single space.
///
/// A lone whitespace character is left untouched, even a tab or newline.
/// Leading and trailing runs are collapsed, not removed.
///
/// ```rust
/// use fieldcheck::sanitize::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("a   b"), "a b");
/// assert_eq!(collapse_whitespace("a\tb"), "a\tb");
/// assert_eq!(collapse_whitespace("  a  "), " a ");
/// ```
pub fn collapse_whitespace(input: &str) -> String {
    WHITESPACE_RUN.replace_all(input, " ").into_owned()
}

/// Strip leading and trailing `/` characters.
///
/// ```rust
/// use fieldcheck::sanitize::trim_slashes;
///
/// assert_eq!(trim_slashes("/a/b/"), "a/b");
/// assert_eq!(trim_slashes("///"), "");
/// ```
pub fn trim_slashes(input: &str) -> String {
    input.trim_matches('/').to_string()
}

/// Replace every character that has an HTML entity with that entity.
///
/// Markup characters are always escaped, both quote styles included (`"` as
/// `&quot;`, `'` as `&#039;`). Every other character in the HTML 4.01 named
/// set (Latin-1, Greek, punctuation, arrows, math operators and shapes) uses
/// its named entity. Existing entities are not recognised,
/// so `&amp;` becomes `&amp;amp;`.
///
/// ```rust
/// use fieldcheck::sanitize::escape_html;
///
/// assert_eq!(escape_html("Tom & Jerry's"), "Tom &amp; Jerry&#039;s");
/// assert_eq!(escape_html("café – 5€"), "caf&eacute; &ndash; 5&euro;");
/// ```
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match entity(c) {
            Some(name) => {
                out.push('&');
                out.push_str(name);
                out.push(';');
            }
            None => out.push(c),
        }
    }
    out
}

/// Entity body (without `&` and `;`) for `c`, if it has one.
///
/// Covers the full HTML 4.01 named set plus `&#039;` for the apostrophe.
fn entity(c: char) -> Option<&'static str> {
    let name = match c {
        '&' => "amp",
        '<' => "lt",
        '>' => "gt",
        '"' => "quot",
        '\'' => "#039",
        '\u{a0}'..='\u{ff}' => LATIN_1[c as usize - 0xa0],
        '\u{3a2}' => return None,
        '\u{391}'..='\u{3a9}' => GREEK_CAPITAL[c as usize - 0x391],
        '\u{3b1}'..='\u{3c9}' => GREEK_SMALL[c as usize - 0x3b1],
        // Latin Extended and spacing modifiers
        '\u{152}' => "OElig",
        '\u{153}' => "oelig",
        '\u{160}' => "Scaron",
        '\u{161}' => "scaron",
        '\u{178}' => "Yuml",
        '\u{192}' => "fnof",
        '\u{2c6}' => "circ",
        '\u{2dc}' => "tilde",
        '\u{3d1}' => "thetasym",
        '\u{3d2}' => "upsih",
        '\u{3d6}' => "piv",
        // General Punctuation
        '\u{2002}' => "ensp",
        '\u{2003}' => "emsp",
        '\u{2009}' => "thinsp",
        '\u{200c}' => "zwnj",
        '\u{200d}' => "zwj",
        '\u{200e}' => "lrm",
        '\u{200f}' => "rlm",
        '\u{2013}' => "ndash",
        '\u{2014}' => "mdash",
        '\u{2018}' => "lsquo",
        '\u{2019}' => "rsquo",
        '\u{201a}' => "sbquo",
        '\u{201c}' => "ldquo",
        '\u{201d}' => "rdquo",
        '\u{201e}' => "bdquo",
        '\u{2020}' => "dagger",
        '\u{2021}' => "Dagger",
        '\u{2022}' => "bull",
        '\u{2026}' => "hellip",
        '\u{2030}' => "permil",
        '\u{2032}' => "prime",
        '\u{2033}' => "Prime",
        '\u{2039}' => "lsaquo",
        '\u{203a}' => "rsaquo",
        '\u{203e}' => "oline",
        '\u{2044}' => "frasl",
        '\u{20ac}' => "euro",
        // Letterlike symbols
        '\u{2111}' => "image",
        '\u{2118}' => "weierp",
        '\u{211c}' => "real",
        '\u{2122}' => "trade",
        '\u{2135}' => "alefsym",
        // Arrows
        '\u{2190}' => "larr",
        '\u{2191}' => "uarr",
        '\u{2192}' => "rarr",
        '\u{2193}' => "darr",
        '\u{2194}' => "harr",
        '\u{21b5}' => "crarr",
        '\u{21d0}' => "lArr",
        '\u{21d1}' => "uArr",
        '\u{21d2}' => "rArr",
        '\u{21d3}' => "dArr",
        '\u{21d4}' => "hArr",
        // Mathematical operators
        '\u{2200}' => "forall",
        '\u{2202}' => "part",
        '\u{2203}' => "exist",
        '\u{2205}' => "empty",
        '\u{2207}' => "nabla",
        '\u{2208}' => "isin",
        '\u{2209}' => "notin",
        '\u{220b}' => "ni",
        '\u{220f}' => "prod",
        '\u{2211}' => "sum",
        '\u{2212}' => "minus",
        '\u{2217}' => "lowast",
        '\u{221a}' => "radic",
        '\u{221d}' => "prop",
        '\u{221e}' => "infin",
        '\u{2220}' => "ang",
        '\u{2227}' => "and",
        '\u{2228}' => "or",
        '\u{2229}' => "cap",
        '\u{222a}' => "cup",
        '\u{222b}' => "int",
        '\u{2234}' => "there4",
        '\u{223c}' => "sim",
        '\u{2245}' => "cong",
        '\u{2248}' => "asymp",
        '\u{2260}' => "ne",
        '\u{2261}' => "equiv",
        '\u{2264}' => "le",
        '\u{2265}' => "ge",
        '\u{2282}' => "sub",
        '\u{2283}' => "sup",
        '\u{2284}' => "nsub",
        '\u{2286}' => "sube",
        '\u{2287}' => "supe",
        '\u{2295}' => "oplus",
        '\u{2297}' => "otimes",
        '\u{22a5}' => "perp",
        '\u{22c5}' => "sdot",
        // Miscellaneous technical and geometric shapes
        '\u{2308}' => "lceil",
        '\u{2309}' => "rceil",
        '\u{230a}' => "lfloor",
        '\u{230b}' => "rfloor",
        '\u{2329}' => "lang",
        '\u{232a}' => "rang",
        '\u{25ca}' => "loz",
        '\u{2660}' => "spades",
        '\u{2663}' => "clubs",
        '\u{2665}' => "hearts",
        '\u{2666}' => "diams",
        _ => return None,
    };
    Some(name)
}

// U+00A0..=U+00FF
const LATIN_1: [&str; 96] = [
    "nbsp", "iexcl", "cent", "pound", "curren", "yen", "brvbar", "sect", //
    "uml", "copy", "ordf", "laquo", "not", "shy", "reg", "macr", //
    "deg", "plusmn", "sup2", "sup3", "acute", "micro", "para", "middot", //
    "cedil", "sup1", "ordm", "raquo", "frac14", "frac12", "frac34", "iquest", //
    "Agrave", "Aacute", "Acirc", "Atilde", "Auml", "Aring", "AElig", "Ccedil", //
    "Egrave", "Eacute", "Ecirc", "Euml", "Igrave", "Iacute", "Icirc", "Iuml", //
    "ETH", "Ntilde", "Ograve", "Oacute", "Ocirc", "Otilde", "Ouml", "times", //
    "Oslash", "Ugrave", "Uacute", "Ucirc", "Uuml", "Yacute", "THORN", "szlig", //
    "agrave", "aacute", "acirc", "atilde", "auml", "aring", "aelig", "ccedil", //
    "egrave", "eacute", "ecirc", "euml", "igrave", "iacute", "icirc", "iuml", //
    "eth", "ntilde", "ograve", "oacute", "ocirc", "otilde", "ouml", "divide", //
    "oslash", "ugrave", "uacute", "ucirc", "uuml", "yacute", "thorn", "yuml", //
];

// U+0391..=U+03A9; U+03A2 is unassigned and never indexed
const GREEK_CAPITAL: [&str; 25] = [
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", //
    "Iota", "Kappa", "Lambda", "Mu", "Nu", "Xi", "Omicron", "Pi", //
    "Rho", "", "Sigma", "Tau", "Upsilon", "Phi", "Chi", "Psi", "Omega", //
];

// U+03B1..=U+03C9
const GREEK_SMALL: [&str; 25] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta", //
    "iota", "kappa", "lambda", "mu", "nu", "xi", "omicron", "pi", //
    "rho", "sigmaf", "sigma", "tau", "upsilon", "phi", "chi", "psi", "omega", //
];
