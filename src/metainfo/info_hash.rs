use super::error::MetainfoError;
use crate::bencode::{encode, Value};
use sha1::{Digest, Sha1};
use std::fmt;

/// A v1 info hash: the SHA-1 digest of the bencoded `info` dictionary.
///
/// This is the 20-byte identifier a magnet link's `xt` parameter carries.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoHash([u8; 20]);

impl InfoHash {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MetainfoError> {
        if bytes.len() != 20 {
            return Err(MetainfoError::InvalidHashLength(bytes.len()));
        }
        let mut arr = [0u8; 20];
        arr.copy_from_slice(bytes);
        Ok(InfoHash(arr))
    }

    pub fn from_hex(s: &str) -> Result<Self, MetainfoError> {
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Lowercase hex form, 40 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for InfoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InfoHash({})", self.to_hex())
    }
}

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Computes the info hash of a decoded torrent document.
///
/// The `info` value is re-encoded in canonical form before hashing, so a
/// document whose raw bytes carried unsorted keys still produces the digest
/// its canonical encoding would.
///
/// # Errors
///
/// Returns [`MetainfoError::MissingInfoDict`] if the root is not a dictionary
/// or has no `info` key, and [`MetainfoError::InvalidInfoDict`] if the `info`
/// value is not itself a dictionary.
pub fn compute_info_hash(document: &Value) -> Result<InfoHash, MetainfoError> {
    let info = document
        .get(b"info")
        .ok_or(MetainfoError::MissingInfoDict)?;

    if info.as_dict().is_none() {
        return Err(MetainfoError::InvalidInfoDict);
    }

    let mut hasher = Sha1::new();
    hasher.update(encode(info));
    let digest: [u8; 20] = hasher.finalize().into();
    Ok(InfoHash(digest))
}
