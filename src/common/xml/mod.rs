//! XML helpers shared by the deck writer and the outline reader.

mod escape;

pub use escape::{escape_xml, is_xml_char, unescape_xml};
