use super::info_hash::InfoHash;
use crate::bencode::Value;
use std::collections::BTreeSet;

/// The pieces of a `magnet:` URI derived from a torrent document.
#[derive(Debug, Clone)]
pub struct MagnetLink {
    pub info_hash: InfoHash,
    /// `info.name`, decoded as lossy UTF-8.
    pub display_name: Option<String>,
    /// Tracker URLs, deduplicated and sorted.
    pub trackers: Vec<String>,
}

impl MagnetLink {
    /// Gathers the display name and trackers for `info_hash` from a decoded
    /// torrent document.
    ///
    /// Missing or oddly-typed fields are skipped rather than treated as
    /// errors, so the link degrades to a bare `xt` parameter when the
    /// document has nothing else usable. Byte strings that are not valid
    /// UTF-8 are decoded lossily and come out with replacement characters.
    pub fn new(info_hash: InfoHash, document: &Value) -> Self {
        let display_name = document
            .get(b"info")
            .and_then(|info| info.get(b"name"))
            .and_then(Value::as_bytes)
            .map(|name| String::from_utf8_lossy(name).into_owned());

        // BTreeSet both deduplicates and sorts by the decoded string.
        let mut trackers = BTreeSet::new();

        if let Some(announce) = document.get(b"announce").and_then(Value::as_bytes) {
            trackers.insert(String::from_utf8_lossy(announce).into_owned());
        }

        if let Some(tiers) = document.get(b"announce-list").and_then(Value::as_list) {
            for tier in tiers {
                if let Some(urls) = tier.as_list() {
                    for url in urls {
                        if let Some(url) = url.as_bytes() {
                            trackers.insert(String::from_utf8_lossy(url).into_owned());
                        }
                    }
                }
            }
        }

        Self {
            info_hash,
            display_name,
            trackers: trackers.into_iter().collect(),
        }
    }

    /// Renders the `magnet:` URI.
    ///
    /// Parameters appear in a fixed order: `xt`, then `dn` when a display
    /// name is present, then one `tr` per tracker. Names and URLs are
    /// percent-encoded, leaving only RFC 3986 unreserved characters bare.
    pub fn to_uri(&self) -> String {
        let mut uri = format!("magnet:?xt=urn:btih:{}", self.info_hash.to_hex());

        if let Some(ref name) = self.display_name {
            uri.push_str("&dn=");
            uri.push_str(&urlencoding::encode(name));
        }

        for tracker in &self.trackers {
            uri.push_str("&tr=");
            uri.push_str(&urlencoding::encode(tracker));
        }

        uri
    }
}
