//! OPC package assembly: parts, relationships and `[Content_Types].xml`.

use super::constants::{content_type as ct, part};
use super::rels::{Relationships, rels_partname};
use crate::common::xml::escape_xml;
use crate::error::Result;
use std::collections::BTreeMap;
use std::io::Write;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Collects package parts in memory and serializes them as a ZIP archive.
///
/// `[Content_Types].xml` is generated from the registered parts and written
/// first, followed by the parts in insertion order.
#[derive(Debug, Default)]
pub(crate) struct PackageWriter {
    parts: Vec<(String, Vec<u8>)>,
    content_types: ContentTypesItem,
}

impl PackageWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part with an override content type.
    pub fn add_part(&mut self, partname: &str, content_type: &str, blob: impl Into<Vec<u8>>) {
        self.content_types.add_content_type(partname, content_type);
        self.parts.push((partname.to_string(), blob.into()));
    }

    /// Add the relationships part for `source` (empty string for the package).
    pub fn add_rels(&mut self, source: &str, rels: &Relationships) -> Result<()> {
        if rels.is_empty() {
            return Ok(());
        }
        let xml = rels.to_xml()?;
        self.parts.push((rels_partname(source), xml.into_bytes()));
        Ok(())
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Serialize the package to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut zip_writer = ZipWriter::new(std::io::Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        zip_writer.start_file(part::CONTENT_TYPES, options)?;
        zip_writer.write_all(self.content_types.to_xml().as_bytes())?;

        for (name, blob) in &self.parts {
            zip_writer.start_file(name.as_str(), options)?;
            zip_writer.write_all(blob)?;
        }

        let cursor = zip_writer.finish()?;
        Ok(cursor.into_inner())
    }
}

/// Helper for building [Content_Types].xml content.
#[derive(Debug)]
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,
    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl Default for ContentTypesItem {
    fn default() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());
        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }
}

impl ContentTypesItem {
    fn add_content_type(&mut self, partname: &str, content_type: &str) {
        let ext = partname.rsplit_once('.').map(|(_, ext)| ext).unwrap_or_default();
        if self.defaults.get(ext).is_some_and(|ct| ct == content_type) {
            return;
        }
        self.overrides
            .insert(format!("/{}", partname), content_type.to_string());
    }

    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );

        // BTreeMap keeps both lists sorted
        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }
        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            ));
        }

        xml.push_str("</Types>");
        xml
    }
}
