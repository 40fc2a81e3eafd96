use thiserror::Error;

/// Errors produced while decoding bencode data.
///
/// Every variant carries the byte offset at which the problem was detected,
/// so callers can point at the exact spot in a corrupt file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BencodeError {
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEof(usize),

    #[error("invalid type marker {marker:#04x} at byte {offset}")]
    InvalidTypeMarker { marker: u8, offset: usize },

    #[error("invalid integer at byte {0}")]
    InvalidInteger(usize),

    #[error("invalid string length at byte {0}")]
    InvalidStringLength(usize),

    #[error("invalid dictionary key at byte {0}")]
    InvalidDictKey(usize),

    #[error("nesting too deep at byte {0}")]
    NestingTooDeep(usize),
}

impl BencodeError {
    /// Byte offset in the input where the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            BencodeError::UnexpectedEof(offset)
            | BencodeError::InvalidInteger(offset)
            | BencodeError::InvalidStringLength(offset)
            | BencodeError::InvalidDictKey(offset)
            | BencodeError::NestingTooDeep(offset) => *offset,
            BencodeError::InvalidTypeMarker { offset, .. } => *offset,
        }
    }
}
