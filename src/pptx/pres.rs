/// Presentation part and package assembly for an exported deck.
use super::constants::{content_type as ct, part, relationship_type as rt};
use super::package::PackageWriter;
use super::rels::Relationships;
use super::slide::MutableSlide;
use super::template;
use crate::common::unit::inch_to_emu;
use crate::error::Result;
use crate::model::DeckMeta;
use crate::theme::Theme;
use std::fmt::Write as FmtWrite;
use tracing::debug;

const FIRST_SLIDE_ID: u32 = 256;

/// A PowerPoint presentation under construction.
///
/// Slides are appended in order; [`to_bytes`](Self::to_bytes) assembles the
/// complete package including masters, theme and document properties.
#[derive(Debug)]
pub struct MutablePresentation {
    /// One per deck slide, in deck order
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    meta: DeckMeta,
    title: String,
}

impl MutablePresentation {
    /// Create an empty presentation sized to the theme canvas.
    pub fn new(theme: &Theme) -> Self {
        Self {
            slides: Vec::new(),
            slide_width: inch_to_emu(theme.width),
            slide_height: inch_to_emu(theme.height),
            meta: DeckMeta::default(),
            title: String::new(),
        }
    }

    pub fn set_properties(&mut self, meta: DeckMeta, title: &str) {
        self.meta = meta;
        self.title = title.to_string();
    }

    /// Append a blank slide; `p:sldId` values start at 256.
    pub fn add_slide(&mut self) -> &mut MutableSlide {
        let id = FIRST_SLIDE_ID + self.slides.len() as u32;
        self.slides.push(MutableSlide::new(id));
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// `ppt/presentation.xml`, pointing at parts through the given rel ids.
    pub(crate) fn presentation_xml(
        &self,
        master_rel_id: &str,
        notes_master_rel_id: &str,
        slide_rel_ids: &[String],
    ) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        xml.push_str("<p:sldMasterIdLst>");
        write!(xml, r#"<p:sldMasterId id="2147483648" r:id="{}"/>"#, master_rel_id)?;
        xml.push_str("</p:sldMasterIdLst>");

        xml.push_str("<p:notesMasterIdLst>");
        write!(xml, r#"<p:notesMasterId r:id="{}"/>"#, notes_master_rel_id)?;
        xml.push_str("</p:notesMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, slide.slide_id(), rel_id)?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Assemble the full package.
    pub fn to_bytes(&self, theme: &Theme) -> Result<Vec<u8>> {
        let mut pkg = PackageWriter::new();

        let mut pkg_rels = Relationships::new();
        pkg_rels.add(rt::OFFICE_DOCUMENT, part::PRESENTATION);
        pkg_rels.add(rt::CORE_PROPERTIES, part::CORE_PROPS);
        pkg_rels.add(rt::EXTENDED_PROPERTIES, part::APP_PROPS);
        pkg.add_rels("", &pkg_rels)?;

        let mut pres_rels = Relationships::new();
        let master_rid = pres_rels.add(rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        let slide_rids: Vec<String> = (1..=self.slides.len())
            .map(|n| pres_rels.add(rt::SLIDE, format!("slides/slide{}.xml", n)))
            .collect();
        let notes_master_rid = pres_rels.add(rt::NOTES_MASTER, "notesMasters/notesMaster1.xml");
        pres_rels.add(rt::PRES_PROPS, "presProps.xml");
        pres_rels.add(rt::VIEW_PROPS, "viewProps.xml");
        pres_rels.add(rt::THEME, "theme/theme1.xml");
        pres_rels.add(rt::TABLE_STYLES, "tableStyles.xml");

        let pres_xml =
            self.presentation_xml(&master_rid, &notes_master_rid, &slide_rids)?;
        pkg.add_part(part::PRESENTATION, ct::PML_PRESENTATION_MAIN, pres_xml);
        pkg.add_rels(part::PRESENTATION, &pres_rels)?;

        let mut notes_count = 0;
        for (i, slide) in self.slides.iter().enumerate() {
            let number = i + 1;
            let slide_part = part::slide(number);
            let mut slide_rels = Relationships::new();
            slide_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");

            if let Some(notes_xml) = slide.notes_xml() {
                let notes_part = part::notes_slide(number);
                slide_rels.add(rt::NOTES_SLIDE, format!("../notesSlides/notesSlide{}.xml", number));

                let mut notes_rels = Relationships::new();
                notes_rels.add(rt::NOTES_MASTER, "../notesMasters/notesMaster1.xml");
                notes_rels.add(rt::SLIDE, format!("../slides/slide{}.xml", number));
                pkg.add_part(&notes_part, ct::PML_NOTES_SLIDE, notes_xml?);
                pkg.add_rels(&notes_part, &notes_rels)?;
                notes_count += 1;
            }

            pkg.add_part(&slide_part, ct::PML_SLIDE, slide.to_xml()?);
            pkg.add_rels(&slide_part, &slide_rels)?;
        }

        let mut master_rels = Relationships::new();
        master_rels.add(rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        master_rels.add(rt::THEME, "../theme/theme1.xml");
        pkg.add_part(part::SLIDE_MASTER, ct::PML_SLIDE_MASTER, template::slide_master_xml()?);
        pkg.add_rels(part::SLIDE_MASTER, &master_rels)?;

        let mut layout_rels = Relationships::new();
        layout_rels.add(rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        pkg.add_part(part::SLIDE_LAYOUT, ct::PML_SLIDE_LAYOUT, template::slide_layout_xml()?);
        pkg.add_rels(part::SLIDE_LAYOUT, &layout_rels)?;

        let mut notes_master_rels = Relationships::new();
        notes_master_rels.add(rt::THEME, "../theme/theme2.xml");
        pkg.add_part(part::NOTES_MASTER, ct::PML_NOTES_MASTER, template::notes_master_xml()?);
        pkg.add_rels(part::NOTES_MASTER, &notes_master_rels)?;

        pkg.add_part(part::THEME, ct::OFC_THEME, template::theme_xml(theme, "Deck")?);
        pkg.add_part(part::NOTES_THEME, ct::OFC_THEME, template::theme_xml(theme, "Notes")?);
        pkg.add_part(part::PRES_PROPS, ct::PML_PRES_PROPS, template::pres_props_xml()?);
        pkg.add_part(part::VIEW_PROPS, ct::PML_VIEW_PROPS, template::view_props_xml()?);
        pkg.add_part(part::TABLE_STYLES, ct::PML_TABLE_STYLES, template::table_styles_xml());
        pkg.add_part(
            part::CORE_PROPS,
            ct::OPC_CORE_PROPERTIES,
            template::core_props_xml(&self.meta, &self.title)?,
        );
        pkg.add_part(
            part::APP_PROPS,
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(&self.meta, self.slides.len(), notes_count)?,
        );

        debug!(parts = pkg.part_count(), slides = self.slides.len(), "package assembled");
        pkg.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_canvas_size_from_theme() {
        let pres = MutablePresentation::new(&Theme::default());
        assert_eq!(pres.slides().len(), 0);
        assert_eq!(pres.slide_width(), 9_144_000);
        assert_eq!(pres.slide_height(), 5_143_500);
    }

    #[test]
    fn test_add_slide_ids() {
        let mut pres = MutablePresentation::new(&Theme::default());
        assert_eq!(pres.add_slide().slide_id(), 256);
        assert_eq!(pres.add_slide().slide_id(), 257);
        assert_eq!(pres.slides().len(), 2);
    }

    #[test]
    fn test_presentation_xml() {
        let mut pres = MutablePresentation::new(&Theme::default());
        pres.add_slide();
        let xml = pres
            .presentation_xml("rId1", "rId3", &["rId2".to_string()])
            .unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:notesMasterId r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="5143500"/>"#));
    }

    #[test]
    fn test_package_parts() {
        let theme = Theme::default();
        let mut pres = MutablePresentation::new(&theme);
        pres.add_slide().set_notes("hidden");
        pres.add_slide();

        let bytes = pres.to_bytes(&theme).unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        for name in [
            "ppt/presentation.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/notesSlides/notesSlide1.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "ppt/theme/theme1.xml",
            "_rels/.rels",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing {}", name);
        }
        assert!(archive.by_name("ppt/notesSlides/notesSlide2.xml").is_err());

        let mut types = String::new();
        archive
            .by_name("[Content_Types].xml")
            .unwrap()
            .read_to_string(&mut types)
            .unwrap();
        assert!(types.contains(r#"PartName="/ppt/notesSlides/notesSlide1.xml""#));
    }
}
