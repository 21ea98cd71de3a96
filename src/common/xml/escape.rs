use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

/// Characters that must not appear raw in deck text, paired by index with
/// the predefined entities that stand in for them.
const RAW: [&str; 5] = ["&", "<", ">", "\"", "'"];
const ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

static ESCAPER: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(RAW).expect("five literal patterns always compile"));

// Leftmost-longest so "&amp;lt;" decodes once, to "&lt;".
static UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(ENTITIES)
        .expect("five literal patterns always compile")
});

/// Whether `c` may appear in an XML 1.0 document at all.
///
/// Tab, LF and CR are the only C0 controls allowed; U+FFFE and U+FFFF are
/// never allowed.
#[inline]
pub fn is_xml_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        '\u{0}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}' => false,
        _ => true,
    }
}

/// Make `s` safe for a text node or a quoted attribute value.
///
/// Characters XML cannot carry at all are dropped.
///
/// # Examples
///
/// ```
/// use deckforge::common::xml::escape_xml;
/// assert_eq!(escape_xml("$2-5M & rising"), "$2-5M &amp; rising");
/// assert_eq!(escape_xml("<b>\"80%\"</b>"), "&lt;b&gt;&quot;80%&quot;&lt;/b&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    if s.chars().all(is_xml_char) {
        ESCAPER.replace_all(s, &ENTITIES)
    } else {
        let kept: String = s.chars().filter(|&c| is_xml_char(c)).collect();
        ESCAPER.replace_all(&kept, &ENTITIES)
    }
}

/// Decode the predefined entities; anything else (including numeric
/// references) passes through untouched.
///
/// # Examples
///
/// ```
/// use deckforge::common::xml::unescape_xml;
/// assert_eq!(unescape_xml("Today &amp; Tomorrow"), "Today & Tomorrow");
/// assert_eq!(unescape_xml("&amp;lt;"), "&lt;");
/// assert_eq!(unescape_xml("&invalid;"), "&invalid;");
/// ```
#[inline]
pub fn unescape_xml(s: &str) -> String {
    UNESCAPER.replace_all(s, &RAW)
}
