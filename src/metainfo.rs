//! Torrent metainfo handling: info hashes and magnet links ([BEP-3], [BEP-9]).
//!
//! A `.torrent` file is a bencoded dictionary whose `info` entry describes
//! the shared content. The SHA-1 digest of the canonically encoded `info`
//! value is the torrent's identity, and a magnet link is that digest plus
//! whatever naming and tracker hints the rest of the document offers.
//!
//! # Examples
//!
//! ## Hashing a torrent document
//!
//! ```
//! use magnetize::bencode::decode;
//! use magnetize::metainfo::compute_info_hash;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let document = decode(b"d4:infod4:name4:test12:piece lengthi16384eee")?;
//! let hash = compute_info_hash(&document)?;
//! assert_eq!(hash.to_hex(), "18f630e31806cc7055fdc88f6bb7301051eee4c2");
//! # Ok(())
//! # }
//! ```
//!
//! ## Building a magnet link
//!
//! ```
//! use magnetize::bencode::decode;
//! use magnetize::metainfo::{compute_info_hash, MagnetLink};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let document = decode(b"d4:infod4:name4:test12:piece lengthi16384eee")?;
//! let hash = compute_info_hash(&document)?;
//! let magnet = MagnetLink::new(hash, &document);
//!
//! assert_eq!(
//!     magnet.to_uri(),
//!     "magnet:?xt=urn:btih:18f630e31806cc7055fdc88f6bb7301051eee4c2&dn=test"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Working with info hashes
//!
//! ```
//! use magnetize::metainfo::InfoHash;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let hash = InfoHash::from_hex("c12fe1c06bba254a9dc9f519b335aa7c1367a88a")?;
//! assert_eq!(hash.as_bytes().len(), 20);
//! assert_eq!(hash.to_hex(), "c12fe1c06bba254a9dc9f519b335aa7c1367a88a");
//! # Ok(())
//! # }
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html
//! [BEP-9]: http://bittorrent.org/beps/bep_0009.html

mod error;
mod info_hash;
mod magnet;

pub use error::MetainfoError;
pub use info_hash::{compute_info_hash, InfoHash};
pub use magnet::MagnetLink;

#[cfg(test)]
mod tests;
