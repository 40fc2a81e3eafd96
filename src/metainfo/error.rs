use thiserror::Error;

/// Errors that can occur when deriving magnet data from a torrent document.
#[derive(Debug, Error)]
pub enum MetainfoError {
    /// The document root is not a dictionary or has no `info` key.
    #[error("no info dictionary")]
    MissingInfoDict,

    /// The `info` value is not a dictionary.
    #[error("info is not a dictionary")]
    InvalidInfoDict,

    /// An info hash was built from a slice of the wrong length.
    #[error("invalid info hash length: {0} bytes")]
    InvalidHashLength(usize),

    /// An info hash hex string did not parse.
    #[error("invalid info hash hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
