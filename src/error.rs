/// Error types for deck loading, layout and export.
use std::path::PathBuf;
use thiserror::Error;

/// Result type for deckforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A deck violates a closed-set or structural invariant of the slide model.
///
/// Raised at load time, before any renderer sees the deck.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedDeckError {
    /// The serialized form could not be decoded, including unknown enum tags
    /// such as an unsupported `layout` or block `type`.
    #[error("cannot decode {format} deck: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// Two slides share the same id
    #[error("duplicate slide id {0}")]
    DuplicateId(u32),

    /// Slide ids start at 1
    #[error("slide \"{title}\" has non-positive id")]
    NonPositiveId { title: String },

    /// Slide title is empty or whitespace
    #[error("slide {id} has an empty title")]
    EmptyTitle { id: u32 },

    /// A table row does not have one cell per header
    #[error(
        "slide {slide}, block {block}: table row {row} has {found} cells, expected {expected}"
    )]
    TableArity {
        slide: u32,
        block: usize,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A deck needs at least one slide
    #[error("deck has no slides")]
    EmptyDeck,

    /// Text carries a character XML cannot represent
    #[error("slide {slide}: text contains control character U+{code:04X}")]
    ControlCharacter { slide: u32, code: u32 },
}

/// The exported deck could not be persisted.
///
/// Not retried; export is a one-shot, user-triggered action.
#[derive(Error, Debug)]
#[error("cannot write deck to {}: {source}", path.display())]
pub struct ExportIoError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

impl ExportIoError {
    pub(crate) fn new(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }
}

/// Error types for deckforge operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Deck model rejected at load time
    #[error("malformed deck: {0}")]
    Malformed(#[from] MalformedDeckError),

    /// Export destination could not be written
    #[error("export failed: {0}")]
    ExportIo(#[from] ExportIoError),

    /// XML generation or parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// ZIP container error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be decoded
    #[error("invalid theme: {0}")]
    Theme(String),

    /// A deck could not be serialized
    #[error("serialization error: {0}")]
    Serialize(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_arity_message() {
        let err = MalformedDeckError::TableArity {
            slide: 4,
            block: 1,
            row: 2,
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "slide 4, block 1: table row 2 has 2 cells, expected 3"
        );
    }

    #[test]
    fn test_export_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = ExportIoError::new("/nope/deck.pptx", io).into();
        assert!(matches!(err, Error::ExportIo(_)));
        assert!(err.to_string().contains("/nope/deck.pptx"));
    }
}
