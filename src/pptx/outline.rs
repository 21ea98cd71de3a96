//! Read a written deck back into an outline of block texts.
//!
//! Slides are visited in `p:sldIdLst` order. Within a slide, shapes named
//! `"{kind} {index}"` are grouped into blocks and every `a:p` they contain
//! contributes one text entry, so a table yields its header cells followed
//! by its body cells row by row.

use super::constants::relationship_type as rt;
use super::constants::part;
use super::rels::rels_partname;
use crate::common::xml::unescape_xml;
use crate::error::{Error, Result};
use crate::model::BlockKind;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Texts of one content block as found in the package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineBlock {
    pub index: usize,
    pub kind: BlockKind,
    pub texts: Vec<String>,
}

/// What a reader of the deck would see on one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideOutline {
    pub title: String,
    pub subtitle: Option<String>,
    pub blocks: Vec<OutlineBlock>,
    /// Speaker notes, lines joined with `\n`
    pub notes: Option<String>,
}

impl SlideOutline {
    /// `(kind, texts)` pairs in block order.
    pub fn block_texts(&self) -> Vec<(BlockKind, Vec<String>)> {
        self.blocks
            .iter()
            .map(|b| (b.kind, b.texts.clone()))
            .collect()
    }
}

/// Outline every slide of a package held in memory.
pub fn read_outline(bytes: &[u8]) -> Result<Vec<SlideOutline>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    outline_archive(&mut archive)
}

/// Outline every slide of the package at `path`.
pub fn read_outline_file(path: impl AsRef<Path>) -> Result<Vec<SlideOutline>> {
    let file = std::fs::File::open(path.as_ref())?;
    let mut archive = ZipArchive::new(file)?;
    outline_archive(&mut archive)
}

fn outline_archive<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Vec<SlideOutline>> {
    let pres_xml = read_part(archive, part::PRESENTATION)?;
    let pres_rels = parse_rels(&read_part(archive, &rels_partname(part::PRESENTATION))?)?;

    let mut slides = Vec::new();
    for rel_id in slide_rel_ids(&pres_xml)? {
        let target = pres_rels
            .iter()
            .find(|r| r.id == rel_id)
            .map(|r| resolve_target(part::PRESENTATION, &r.target))
            .ok_or_else(|| Error::Xml(format!("dangling slide relationship {}", rel_id)))?;
        slides.push(outline_slide(archive, &target)?);
    }
    Ok(slides)
}

fn outline_slide<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    slide_part: &str,
) -> Result<SlideOutline> {
    let mut outline = SlideOutline::default();

    for shape in read_shapes(&read_part(archive, slide_part)?)? {
        match shape.name.as_str() {
            "title" => outline.title = shape.paragraphs.concat(),
            "subtitle" => outline.subtitle = Some(shape.paragraphs.concat()),
            name => {
                let Some((kind, index)) = parse_block_name(name) else {
                    continue;
                };
                match outline.blocks.last_mut() {
                    Some(last) if last.index == index => last.texts.extend(shape.paragraphs),
                    _ => outline.blocks.push(OutlineBlock {
                        index,
                        kind,
                        texts: shape.paragraphs,
                    }),
                }
            },
        }
    }

    let rels_name = rels_partname(slide_part);
    if archive.by_name(&rels_name).is_ok() {
        let rels = parse_rels(&read_part(archive, &rels_name)?)?;
        if let Some(rel) = rels.iter().find(|r| r.rel_type == rt::NOTES_SLIDE) {
            let notes_part = resolve_target(slide_part, &rel.target);
            outline.notes = read_shapes(&read_part(archive, &notes_part)?)?
                .into_iter()
                .find(|s| s.placeholder.as_deref() == Some("body"))
                .map(|s| s.paragraphs.join("\n"));
        }
    }

    Ok(outline)
}

fn parse_block_name(name: &str) -> Option<(BlockKind, usize)> {
    let (tag, index) = name.rsplit_once(' ')?;
    Some((BlockKind::from_tag(tag)?, index.parse().ok()?))
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    let mut file = archive.by_name(name)?;
    let mut xml = String::with_capacity(file.size() as usize);
    file.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Resolve a relationship target against the part that owns it.
fn resolve_target(source: &str, target: &str) -> String {
    let mut segments: Vec<&str> = match source.rsplit_once('/') {
        Some((dir, _)) => dir.split('/').collect(),
        None => Vec::new(),
    };
    for segment in target.split('/') {
        match segment {
            ".." => {
                segments.pop();
            },
            "." | "" => {},
            other => segments.push(other),
        }
    }
    segments.join("/")
}

#[derive(Debug)]
struct Rel {
    id: String,
    rel_type: String,
    target: String,
}

fn attr_value(e: &quick_xml::events::BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| unescape_xml(&String::from_utf8_lossy(&attr.value)))
}

fn parse_rels(xml: &str) -> Result<Vec<Rel>> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut rels = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e)
                if e.local_name().as_ref() == b"Relationship" =>
            {
                rels.push(Rel {
                    id: attr_value(e, b"Id").unwrap_or_default(),
                    rel_type: attr_value(e, b"Type").unwrap_or_default(),
                    target: attr_value(e, b"Target").unwrap_or_default(),
                });
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }
    Ok(rels)
}

fn slide_rel_ids(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut ids = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e) if e.local_name().as_ref() == b"sldId" => {
                if let Some(id) = attr_value(e, b"r:id") {
                    ids.push(id);
                }
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }
    Ok(ids)
}

#[derive(Debug, Default)]
struct ShapeText {
    name: String,
    placeholder: Option<String>,
    paragraphs: Vec<String>,
}

fn is_shape(local: &[u8]) -> bool {
    matches!(local, b"sp" | b"graphicFrame" | b"cxnSp")
}

/// Collect the name, placeholder type and paragraph texts of every
/// top-level shape in a slide or notes part.
fn read_shapes(xml: &str) -> Result<Vec<ShapeText>> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut shapes = Vec::new();

    let mut depth = 0usize;
    let mut current: Option<(usize, ShapeText)> = None;
    let mut paragraph: Option<String> = None;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                depth += 1;
                let local = e.local_name();
                match local.as_ref() {
                    l if is_shape(l) && current.is_none() => {
                        current = Some((depth, ShapeText::default()));
                    },
                    b"cNvPr" => set_shape_name(&mut current, e),
                    b"p" if current.is_some() => paragraph = Some(String::new()),
                    b"t" if paragraph.is_some() => in_text = true,
                    _ => {},
                }
            },
            Event::Empty(ref e) => match e.local_name().as_ref() {
                b"cNvPr" => set_shape_name(&mut current, e),
                b"ph" => {
                    if let Some((_, shape)) = current.as_mut() {
                        shape.placeholder = attr_value(e, b"type");
                    }
                },
                b"p" if current.is_some() => {
                    if let Some((_, shape)) = current.as_mut() {
                        shape.paragraphs.push(String::new());
                    }
                },
                _ => {},
            },
            Event::Text(ref t) if in_text => {
                if let Some(p) = paragraph.as_mut() {
                    p.push_str(&String::from_utf8_lossy(t));
                }
            },
            Event::GeneralRef(ref r) if in_text => {
                if let Some(p) = paragraph.as_mut() {
                    p.push_str(&resolve_reference(&String::from_utf8_lossy(r)));
                }
            },
            Event::CData(ref c) if in_text => {
                if let Some(p) = paragraph.as_mut() {
                    p.push_str(&String::from_utf8_lossy(c));
                }
            },
            Event::End(ref e) => {
                match e.local_name().as_ref() {
                    b"t" => in_text = false,
                    b"p" => {
                        if let (Some(text), Some((_, shape))) = (paragraph.take(), current.as_mut())
                        {
                            shape.paragraphs.push(text);
                        }
                    },
                    l if is_shape(l) => {
                        if current.as_ref().is_some_and(|(d, _)| *d == depth) {
                            if let Some((_, shape)) = current.take() {
                                shapes.push(shape);
                            }
                        }
                    },
                    _ => {},
                }
                depth = depth.saturating_sub(1);
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(shapes)
}

fn set_shape_name(current: &mut Option<(usize, ShapeText)>, e: &quick_xml::events::BytesStart<'_>) {
    if let Some((_, shape)) = current.as_mut()
        && shape.name.is_empty()
        && let Some(name) = attr_value(e, b"name")
    {
        shape.name = name;
    }
}

/// Expand an entity or character reference given without `&` and `;`.
fn resolve_reference(name: &str) -> String {
    if let Some(code) = name.strip_prefix('#') {
        let parsed = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse().ok(),
        };
        if let Some(ch) = parsed.and_then(char::from_u32) {
            return ch.to_string();
        }
    }
    unescape_xml(&format!("&{};", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentBlock, Deck, LayoutKind, Slide};
    use crate::pptx::render;
    use crate::theme::Theme;

    #[test]
    fn test_resolve_target() {
        assert_eq!(
            resolve_target("ppt/presentation.xml", "slides/slide2.xml"),
            "ppt/slides/slide2.xml"
        );
        assert_eq!(
            resolve_target("ppt/slides/slide1.xml", "../notesSlides/notesSlide1.xml"),
            "ppt/notesSlides/notesSlide1.xml"
        );
    }

    #[test]
    fn test_parse_block_name() {
        assert_eq!(parse_block_name("stats-row 3"), Some((BlockKind::StatsRow, 3)));
        assert_eq!(parse_block_name("icon-box 0"), Some((BlockKind::IconBox, 0)));
        assert_eq!(parse_block_name("page-number"), None);
        assert_eq!(parse_block_name("header bar"), None);
    }

    #[test]
    fn test_resolve_reference() {
        assert_eq!(resolve_reference("amp"), "&");
        assert_eq!(resolve_reference("#x2014"), "\u{2014}");
        assert_eq!(resolve_reference("#65"), "A");
    }

    #[test]
    fn test_read_shapes_keeps_whitespace_and_entities() {
        let xml = concat!(
            r#"<p:sld xmlns:p="p" xmlns:a="a"><p:cSld><p:spTree>"#,
            r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="text 0"/></p:nvSpPr>"#,
            r#"<p:txBody><a:p><a:r><a:t>  R&amp;D </a:t></a:r></a:p><a:p><a:r><a:t></a:t></a:r></a:p></p:txBody></p:sp>"#,
            r#"</p:spTree></p:cSld></p:sld>"#
        );
        let shapes = read_shapes(xml).unwrap();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].name, "text 0");
        assert_eq!(shapes[0].paragraphs, vec!["  R&D ".to_string(), String::new()]);
    }

    #[test]
    fn test_outline_round_trip() {
        let deck = Deck::new(vec![
            Slide::new(1, "Q & A", LayoutKind::Table)
                .with_subtitle("<today>")
                .with_block(ContentBlock::Table {
                    headers: vec!["Today".to_string(), "Tomorrow".to_string()],
                    rows: vec![vec!["manual".to_string(), String::new()]],
                })
                .with_notes("first line\nsecond line"),
            Slide::new(2, "Quiet", LayoutKind::Content).with_block(ContentBlock::Numbered {
                items: vec!["one".to_string(), "two".to_string()],
            }),
        ])
        .unwrap();

        let bytes = render(&deck, &Theme::default()).unwrap();
        let outline = read_outline(&bytes).unwrap();
        assert_eq!(outline.len(), 2);

        assert_eq!(outline[0].title, "Q & A");
        assert_eq!(outline[0].subtitle.as_deref(), Some("<today>"));
        assert_eq!(
            outline[0].block_texts(),
            vec![(
                BlockKind::Table,
                vec![
                    "Today".to_string(),
                    "Tomorrow".to_string(),
                    "manual".to_string(),
                    String::new()
                ]
            )]
        );
        assert_eq!(outline[0].notes.as_deref(), Some("first line\nsecond line"));

        assert_eq!(outline[1].blocks[0].kind, BlockKind::Numbered);
        assert_eq!(outline[1].blocks[0].texts, vec!["1. one".to_string(), "2. two".to_string()]);
        assert_eq!(outline[1].notes, None);
    }
}
