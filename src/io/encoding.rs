use encoding_rs::Encoding;

use crate::error::{ConvertError, Result};

/// Resolves a user-supplied encoding label such as `utf-8` or `latin1`.
pub fn resolve(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| ConvertError::UnknownEncoding(label.to_string()))
}

/// Decodes raw bytes under the given encoding. Malformed sequences decode to
/// replacement characters; the JSON parser decides acceptance afterwards.
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> String {
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

/// Encodes output text under the given encoding.
pub fn encode(text: &str, encoding: &'static Encoding) -> Vec<u8> {
    let (bytes, _, _) = encoding.encode(text);
    bytes.into_owned()
}
