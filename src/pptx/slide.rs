/// One slide of the package plus its optional notes page.
use super::background::write_background;
use super::shape::MutableShape;
use crate::common::xml::escape_xml;
use crate::error::Result;
use crate::layout::{BackgroundFill, Fill, Line, TableGrid, TextBox};
use std::fmt::Write as FmtWrite;

/// A slide being assembled from layout primitives.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Presentation-level slide ID (`p:sldId/@id`, 256 and up)
    pub(crate) slide_id: u32,
    pub(crate) background: Option<BackgroundFill>,
    /// Shapes in z-order
    pub(crate) shapes: Vec<MutableShape>,
    /// Written to a notes page, never onto the slide itself
    pub(crate) notes: Option<String>,
}

impl MutableSlide {
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            background: None,
            shapes: Vec::new(),
            notes: None,
        }
    }

    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    // Group shape uses id 1.
    fn next_shape_id(&self) -> u32 {
        self.shapes.len() as u32 + 2
    }

    pub fn set_background(&mut self, background: BackgroundFill) {
        self.background = Some(background);
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.notes = Some(notes.to_string());
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn add_text_box(&mut self, name: impl Into<String>, text: &TextBox, font: &str) {
        let shape = MutableShape::new_text_box(self.next_shape_id(), name.into(), text, font);
        self.shapes.push(shape);
    }

    pub fn add_auto_shape(&mut self, name: impl Into<String>, fill: &Fill) {
        let shape = MutableShape::new_auto_shape(self.next_shape_id(), name.into(), fill);
        self.shapes.push(shape);
    }

    pub fn add_connector(&mut self, name: impl Into<String>, line: &Line) {
        let shape = MutableShape::new_connector(self.next_shape_id(), name.into(), line);
        self.shapes.push(shape);
    }

    pub fn add_table(&mut self, name: impl Into<String>, grid: &TableGrid, font: &str) {
        let shape = MutableShape::new_table(self.next_shape_id(), name.into(), grid, font);
        self.shapes.push(shape);
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// `ppt/slides/slideN.xml`: background, then shapes in paint order.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096 + self.shapes.len() * 512);
        open_part(&mut xml, "p:sld");
        if let Some(background) = &self.background {
            write_background(&mut xml, background)?;
        }
        open_tree(&mut xml);
        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }
        close_part(&mut xml, "p:sld");
        Ok(xml)
    }

    /// `ppt/notesSlides/notesSlideN.xml`, or `None` for a slide without notes.
    ///
    /// Each notes line becomes its own paragraph in the body placeholder. A
    /// trailing newline yields a final empty paragraph, so the text reads
    /// back exactly as written.
    pub(crate) fn notes_xml(&self) -> Option<Result<String>> {
        self.notes.as_deref().map(notes_page_xml)
    }
}

fn notes_page_xml(notes: &str) -> Result<String> {
    let mut xml = String::with_capacity(1024 + notes.len());
    open_part(&mut xml, "p:notes");
    open_tree(&mut xml);

    write_placeholder(&mut xml, 2, "Slide Image", r#"type="sldImg""#)?;
    xml.push_str("</p:sp>");

    write_placeholder(&mut xml, 3, "Notes", r#"type="body" idx="1""#)?;
    xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/>");
    for line in notes.split('\n') {
        write!(
            xml,
            r#"<a:p><a:r><a:rPr lang="en-US" dirty="0"/><a:t>{}</a:t></a:r></a:p>"#,
            escape_xml(line)
        )?;
    }
    xml.push_str("</p:txBody></p:sp>");

    close_part(&mut xml, "p:notes");
    Ok(xml)
}

/// XML declaration plus the root element with the PresentationML namespaces.
fn open_part(xml: &mut String, root: &str) {
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('<');
    xml.push_str(root);
    xml.push_str(concat!(
        r#" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#,
        r#" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main""#,
        r#" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        "<p:cSld>",
    ));
}

/// Shape tree root; the group itself takes shape id 1.
fn open_tree(xml: &mut String) {
    xml.push_str(concat!(
        "<p:spTree>",
        r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
        r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
        r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
    ));
}

fn close_part(xml: &mut String, root: &str) {
    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></");
    xml.push_str(root);
    xml.push('>');
}

/// Opens a placeholder `p:sp`; the caller adds the body and closes it.
fn write_placeholder(xml: &mut String, id: u32, name: &str, ph: &str) -> std::fmt::Result {
    write!(xml, r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="{} {}"/>"#, id, name, id - 1)?;
    write!(
        xml,
        r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph {}/></p:nvPr></p:nvSpPr><p:spPr/>"#,
        ph
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Rect, Run, ShapeKind, TextStyle};
    use crate::theme::Rgb;

    #[test]
    fn test_shape_ids_follow_group() {
        let mut slide = MutableSlide::new(256);
        let fill = Fill {
            rect: Rect::new(0.0, 0.0, 10.0, 0.9),
            shape: ShapeKind::Rect,
            color: Rgb(0x1e, 0x3a, 0x5f),
        };
        slide.add_auto_shape("header-bar", &fill);
        let text = TextBox {
            rect: Rect::new(0.5, 0.15, 9.0, 0.6),
            runs: vec![Run::plain("Hello")],
            style: TextStyle::new(28.0, Rgb(0xff, 0xff, 0xff)),
        };
        slide.add_text_box("title", &text, "Arial");

        let xml = slide.to_xml().unwrap();
        assert!(xml.contains(r#"<p:cNvPr id="2" name="header-bar"/>"#));
        assert!(xml.contains(r#"<p:cNvPr id="3" name="title"/>"#));
        assert_eq!(slide.shapes().len(), 2);
    }

    #[test]
    fn test_background_precedes_tree() {
        let mut slide = MutableSlide::new(256);
        slide.set_background(BackgroundFill::Solid(Rgb(0xff, 0xff, 0xff)));
        let xml = slide.to_xml().unwrap();
        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
    }

    #[test]
    fn test_notes_xml() {
        let mut slide = MutableSlide::new(256);
        assert!(slide.notes_xml().is_none());
        slide.set_notes("Line one\nQ&A after");
        let xml = slide.notes_xml().unwrap().unwrap();
        assert!(xml.contains(r#"<p:ph type="body" idx="1"/>"#));
        assert!(xml.contains("<a:t>Line one</a:t>"));
        assert!(xml.contains("<a:t>Q&amp;A after</a:t>"));
    }

    #[test]
    fn test_notes_keep_trailing_newline() {
        let mut slide = MutableSlide::new(256);
        slide.set_notes("Say this.\n");
        let xml = slide.notes_xml().unwrap().unwrap();
        assert_eq!(xml.matches("<a:p>").count(), 2);
        assert!(xml.contains("<a:t>Say this.</a:t></a:r></a:p><a:p><a:r><a:rPr lang=\"en-US\" dirty=\"0\"/><a:t></a:t>"));
    }
}
