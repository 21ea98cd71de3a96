use super::block::ContentBlock;
use super::slide::Slide;
use crate::common::xml::is_xml_char;
use crate::error::MalformedDeckError;
use std::collections::HashSet;

/// Check the structural invariants serde cannot express.
///
/// Closed-set violations never reach this point; they fail decoding.
pub(crate) fn validate_slides(slides: &[Slide]) -> Result<(), MalformedDeckError> {
    if slides.is_empty() {
        return Err(MalformedDeckError::EmptyDeck);
    }

    let mut seen = HashSet::with_capacity(slides.len());
    for slide in slides {
        if slide.id == 0 {
            return Err(MalformedDeckError::NonPositiveId {
                title: slide.title.clone(),
            });
        }
        if !seen.insert(slide.id) {
            return Err(MalformedDeckError::DuplicateId(slide.id));
        }
        if slide.title.trim().is_empty() {
            return Err(MalformedDeckError::EmptyTitle { id: slide.id });
        }
        for (block_idx, block) in slide.content.iter().enumerate() {
            check_block(slide.id, block_idx, block)?;
        }
        check_text(slide)?;
    }

    Ok(())
}

fn check_block(slide: u32, block: usize, content: &ContentBlock) -> Result<(), MalformedDeckError> {
    if let ContentBlock::Table { headers, rows } = content {
        let expected = headers.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(MalformedDeckError::TableArity {
                slide,
                block,
                row,
                expected,
                found: cells.len(),
            });
        }
    }
    Ok(())
}

/// Every string on the slide must survive both the terminal and the package.
fn check_text(slide: &Slide) -> Result<(), MalformedDeckError> {
    let strings = std::iter::once(slide.title.as_str())
        .chain(slide.subtitle.as_deref())
        .chain(slide.notes.as_deref())
        .chain(slide.content.iter().flat_map(ContentBlock::strings));
    for s in strings {
        if let Some(c) = s.chars().find(|&c| !is_xml_char(c)) {
            return Err(MalformedDeckError::ControlCharacter {
                slide: slide.id,
                code: c as u32,
            });
        }
    }
    Ok(())
}
