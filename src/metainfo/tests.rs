use crate::bencode::decode;

use super::*;

fn magnet_for(data: &[u8]) -> MagnetLink {
    let document = decode(data).unwrap();
    let hash = compute_info_hash(&document).unwrap();
    MagnetLink::new(hash, &document)
}

#[test]
fn test_info_hash_from_hex() {
    let hex = "0123456789abcdef0123456789abcdef01234567";
    let hash = InfoHash::from_hex(hex).unwrap();
    assert_eq!(hash.to_hex(), hex);
    assert_eq!(hash.as_bytes()[0], 0x01);
}

#[test]
fn test_info_hash_from_hex_invalid() {
    assert!(matches!(
        InfoHash::from_hex("xyz"),
        Err(MetainfoError::InvalidHex(_))
    ));
    assert!(matches!(
        InfoHash::from_hex("0123"),
        Err(MetainfoError::InvalidHashLength(2))
    ));
}

#[test]
fn test_info_hash_from_bytes_length() {
    assert!(InfoHash::from_bytes(&[0u8; 20]).is_ok());
    assert!(matches!(
        InfoHash::from_bytes(&[0u8; 19]),
        Err(MetainfoError::InvalidHashLength(19))
    ));
}

#[test]
fn test_info_hash_display() {
    let hash = InfoHash::from_hex("c12fe1c06bba254a9dc9f519b335aa7c1367a88a").unwrap();
    assert_eq!(hash.to_string(), "c12fe1c06bba254a9dc9f519b335aa7c1367a88a");
    assert_eq!(
        format!("{:?}", hash),
        "InfoHash(c12fe1c06bba254a9dc9f519b335aa7c1367a88a)"
    );
}

#[test]
fn test_compute_info_hash() {
    let document = decode(b"d4:infod4:name4:test12:piece lengthi16384eee").unwrap();
    let hash = compute_info_hash(&document).unwrap();
    assert_eq!(hash.to_hex(), "18f630e31806cc7055fdc88f6bb7301051eee4c2");
}

#[test]
fn test_compute_info_hash_canonicalizes() {
    // Same info entries with keys out of order: identical digest
    let document = decode(b"d4:infod12:piece lengthi16384e4:name4:testee").unwrap();
    let hash = compute_info_hash(&document).unwrap();
    assert_eq!(hash.to_hex(), "18f630e31806cc7055fdc88f6bb7301051eee4c2");
}

#[test]
fn test_compute_info_hash_missing_info() {
    let document = decode(b"d8:announce15:http://test.come").unwrap();
    assert!(matches!(
        compute_info_hash(&document),
        Err(MetainfoError::MissingInfoDict)
    ));

    let document = decode(b"i42e").unwrap();
    assert!(matches!(
        compute_info_hash(&document),
        Err(MetainfoError::MissingInfoDict)
    ));
}

#[test]
fn test_compute_info_hash_info_not_dict() {
    let document = decode(b"d4:info4:infoe").unwrap();
    assert!(matches!(
        compute_info_hash(&document),
        Err(MetainfoError::InvalidInfoDict)
    ));
}

#[test]
fn test_magnet_minimal() {
    // No name, no trackers: bare xt parameter
    let magnet = magnet_for(b"d4:infod12:piece lengthi16384eee");
    assert_eq!(magnet.display_name, None);
    assert!(magnet.trackers.is_empty());
    assert_eq!(
        magnet.to_uri(),
        "magnet:?xt=urn:btih:55c12030bae340b80147ac22647258ec4e596bc7"
    );
}

#[test]
fn test_magnet_display_name() {
    let magnet = magnet_for(b"d4:infod4:name4:test12:piece lengthi16384eee");
    assert_eq!(magnet.display_name.as_deref(), Some("test"));
    assert_eq!(
        magnet.to_uri(),
        "magnet:?xt=urn:btih:18f630e31806cc7055fdc88f6bb7301051eee4c2&dn=test"
    );
}

#[test]
fn test_magnet_tracker_dedup_and_sort() {
    let magnet = magnet_for(
        b"d8:announce20:http://b.example/ann13:announce-listll20:http://a.example/annel20:http://b.example/annee4:infod4:name4:test12:piece lengthi16384eee",
    );
    assert_eq!(
        magnet.trackers,
        vec!["http://a.example/ann", "http://b.example/ann"]
    );
    assert_eq!(
        magnet.to_uri(),
        "magnet:?xt=urn:btih:18f630e31806cc7055fdc88f6bb7301051eee4c2&dn=test\
         &tr=http%3A%2F%2Fa.example%2Fann&tr=http%3A%2F%2Fb.example%2Fann"
    );
}

#[test]
fn test_magnet_skips_non_string_announce() {
    let magnet = magnet_for(b"d8:announcei7e4:infod12:piece lengthi16384eee");
    assert!(magnet.trackers.is_empty());
}

#[test]
fn test_magnet_skips_non_string_tracker_entries() {
    let magnet = magnet_for(
        b"d13:announce-listlli42e20:http://a.example/annee4:infod12:piece lengthi16384eee",
    );
    assert_eq!(magnet.trackers, vec!["http://a.example/ann"]);
}

#[test]
fn test_magnet_ignores_non_string_name() {
    let magnet = magnet_for(b"d4:infod4:namei1e12:piece lengthi16384eee");
    assert_eq!(magnet.display_name, None);
}

#[test]
fn test_magnet_non_utf8_name_is_lossy() {
    // name is "caf" plus a lone latin-1 0xE9
    let magnet = magnet_for(b"d4:infod4:name4:caf\xe912:piece lengthi16384eee");
    assert_eq!(magnet.display_name.as_deref(), Some("caf\u{FFFD}"));
    assert!(magnet.to_uri().contains("&dn=caf%EF%BF%BD"));
}

#[test]
fn test_magnet_percent_encodes_reserved() {
    let magnet = magnet_for(b"d4:infod4:name7:My File12:piece lengthi16384eee");
    assert!(magnet.to_uri().contains("&dn=My%20File"));
}

#[test]
fn test_magnet_realistic_torrent() {
    let mut data = Vec::new();
    data.extend_from_slice(b"d8:announce31:http://tracker.example/announce4:infod");
    data.extend_from_slice(b"6:lengthi16384e4:name8:demo.bin12:piece lengthi16384e6:pieces20:");
    data.extend_from_slice(&[0xAA; 20]);
    data.extend_from_slice(b"ee");

    let magnet = magnet_for(&data);
    assert_eq!(
        magnet.to_uri(),
        "magnet:?xt=urn:btih:97d571c2f99db29c74b38e171d1bf63b714894cb\
         &dn=demo.bin&tr=http%3A%2F%2Ftracker.example%2Fannounce"
    );
}
