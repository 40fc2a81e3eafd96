use super::value::Value;

/// Encodes a bencode value to a byte vector.
///
/// The output is canonical bencode:
/// - Integers: `i<number>e`
/// - Byte strings: `<length>:<data>`
/// - Lists: `l<items>e`
/// - Dictionaries: `d<key><value>...e` with keys sorted byte-lexicographically,
///   whatever order the dictionary holds them in
///
/// # Examples
///
/// ```
/// use magnetize::bencode::{encode, Value};
/// use bytes::Bytes;
///
/// // Encode an integer
/// assert_eq!(encode(&Value::Integer(42)), b"i42e");
///
/// // Encode a string
/// assert_eq!(encode(&Value::string("hello")), b"5:hello");
///
/// // Encode a list
/// let list = Value::List(vec![Value::Integer(1), Value::string("two")]);
/// assert_eq!(encode(&list), b"li1e3:twoe");
///
/// // Dictionary keys are sorted on output
/// let dict = Value::Dict(vec![
///     (Bytes::from_static(b"b"), Value::Integer(2)),
///     (Bytes::from_static(b"a"), Value::Integer(1)),
/// ]);
/// assert_eq!(encode(&dict), b"d1:ai1e1:bi2ee");
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_into(value, &mut buf);
    buf
}

/// Encodes a bencode value, appending to an existing buffer.
pub fn encode_into(value: &Value, buf: &mut Vec<u8>) {
    match value {
        Value::Integer(i) => {
            buf.push(b'i');
            buf.extend_from_slice(i.to_string().as_bytes());
            buf.push(b'e');
        }
        Value::Bytes(b) => {
            buf.extend_from_slice(b.len().to_string().as_bytes());
            buf.push(b':');
            buf.extend_from_slice(b);
        }
        Value::List(l) => {
            buf.push(b'l');
            for item in l {
                encode_into(item, buf);
            }
            buf.push(b'e');
        }
        Value::Dict(d) => {
            let mut entries: Vec<_> = d.iter().collect();
            entries.sort_by(|(ka, _), (kb, _)| ka.cmp(kb));

            buf.push(b'd');
            for (key, val) in entries {
                buf.extend_from_slice(key.len().to_string().as_bytes());
                buf.push(b':');
                buf.extend_from_slice(key);
                encode_into(val, buf);
            }
            buf.push(b'e');
        }
    }
}
