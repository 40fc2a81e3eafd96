//! magnetize - Convert `.torrent` files into magnet links
//!
//! This library implements the slice of BitTorrent needed to turn a
//! `.torrent` file into a `magnet:` URI: a bencode codec, canonical info
//! hashing, and magnet link assembly, plus filesystem helpers for converting
//! whole directory trees at once.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 bencode encoding/decoding
//! - [`metainfo`] - Info hashes and magnet link assembly
//! - [`convert`](mod@convert) - One-shot bytes-to-magnet conversion
//! - [`batch`] - Directory scanning, bulk conversion, link list output

pub mod batch;
pub mod bencode;
pub mod convert;
pub mod metainfo;

pub use batch::{
    convert_files, is_torrent_file, scan_torrents, write_magnet_list, BatchSummary, FileError,
    FileErrorKind,
};
pub use bencode::{decode, decode_prefix, encode, encode_into, BencodeError, Dict, Value};
pub use convert::{convert, ConvertError};
pub use metainfo::{compute_info_hash, InfoHash, MagnetLink, MetainfoError};
