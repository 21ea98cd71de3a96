/// Per-part relationship lists.
///
/// Relationships are created before the XML that references them, so the
/// writer always has the real `rId` at hand instead of patching placeholders.
use crate::common::xml::escape_xml;
use crate::error::Result;
use std::fmt::Write as FmtWrite;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Relationship {
    id: String,
    rel_type: &'static str,
    target: String,
}

/// Ordered relationships of one source part, numbered `rId1`, `rId2`, ...
#[derive(Debug, Clone, Default)]
pub(crate) struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its id.
    pub fn add(&mut self, rel_type: &'static str, target: impl Into<String>) -> String {
        let id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            id: id.clone(),
            rel_type,
            target: target.into(),
        });
        id
    }

    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for rel in &self.rels {
            write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                rel.id,
                rel.rel_type,
                escape_xml(&rel.target)
            )?;
        }
        xml.push_str("</Relationships>");
        Ok(xml)
    }
}

/// Path of the `.rels` part that belongs to `partname`.
pub(crate) fn rels_partname(partname: &str) -> String {
    match partname.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", partname),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::constants::relationship_type as rt;

    #[test]
    fn test_ids_are_sequential() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"), "rId1");
        assert_eq!(rels.add(rt::NOTES_SLIDE, "../notesSlides/notesSlide1.xml"), "rId2");
        let xml = rels.to_xml().unwrap();
        assert!(xml.contains(r#"Id="rId2""#));
        assert!(xml.contains("notesSlide1.xml"));
    }

    #[test]
    fn test_rels_partname() {
        assert_eq!(rels_partname("ppt/slides/slide3.xml"), "ppt/slides/_rels/slide3.xml.rels");
        assert_eq!(rels_partname(""), "_rels/.rels");
    }
}
