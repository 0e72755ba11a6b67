use crate::error::{HexentError, Result};
use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use std::borrow::Cow;

pub const DEFAULT_ENCODING: &str = "utf-8";

/// A named text encoding used for reading and writing files.
///
/// Labels follow the WHATWG Encoding Standard, so `latin1` resolves to
/// `windows-1252` and `utf8` to `UTF-8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding(&'static Encoding);

impl TextEncoding {
    pub fn from_label(label: &str) -> Result<Self> {
        Encoding::for_label(label.as_bytes())
            .map(TextEncoding)
            .ok_or_else(|| HexentError::UnknownEncoding {
                label: label.to_string(),
            })
    }

    pub fn name(self) -> &'static str {
        self.0.name()
    }

    /// Strict decode: no BOM sniffing and no replacement characters.
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        self.0
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(Cow::into_owned)
    }

    /// Returns `None` if any character has no representation in this encoding.
    pub fn encode(self, text: &str) -> Option<Vec<u8>> {
        if self.0 == UTF_16LE {
            return Some(text.encode_utf16().flat_map(u16::to_le_bytes).collect());
        }
        if self.0 == UTF_16BE {
            return Some(text.encode_utf16().flat_map(u16::to_be_bytes).collect());
        }

        let (bytes, _, had_unmappable) = self.0.encode(text);
        if had_unmappable {
            None
        } else {
            Some(bytes.into_owned())
        }
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        TextEncoding(UTF_8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_default() {
        let encoding = TextEncoding::from_label(DEFAULT_ENCODING).unwrap();
        assert_eq!(encoding, TextEncoding::default());
        assert_eq!(encoding.name(), "UTF-8");
    }

    #[test]
    fn test_from_label_is_lenient() {
        assert_eq!(TextEncoding::from_label(" UTF8 ").unwrap().name(), "UTF-8");
        assert_eq!(
            TextEncoding::from_label("latin1").unwrap().name(),
            "windows-1252"
        );
    }

    #[test]
    fn test_from_label_unknown() {
        let error = TextEncoding::from_label("klingon").unwrap_err();
        assert!(matches!(error, HexentError::UnknownEncoding { .. }));
    }

    #[test]
    fn test_decode_utf8() {
        let encoding = TextEncoding::default();
        assert_eq!(encoding.decode("héllo".as_bytes()).as_deref(), Some("héllo"));
        assert_eq!(encoding.decode(&[0x66, 0xFF, 0x6F]), None);
    }

    #[test]
    fn test_decode_keeps_bom() {
        let encoding = TextEncoding::default();
        assert_eq!(
            encoding.decode(&[0xEF, 0xBB, 0xBF, b'A']).as_deref(),
            Some("\u{FEFF}A")
        );
    }

    #[test]
    fn test_decode_single_byte() {
        let encoding = TextEncoding::from_label("latin1").unwrap();
        assert_eq!(encoding.decode(&[0x63, 0x61, 0x66, 0xE9]).as_deref(), Some("café"));
    }

    #[test]
    fn test_encode_single_byte() {
        let encoding = TextEncoding::from_label("latin1").unwrap();
        assert_eq!(encoding.encode("café"), Some(vec![0x63, 0x61, 0x66, 0xE9]));
        assert_eq!(encoding.encode("😀"), None);
    }

    #[test]
    fn test_encode_utf16() {
        let little = TextEncoding::from_label("utf-16le").unwrap();
        let big = TextEncoding::from_label("utf-16be").unwrap();
        assert_eq!(little.encode("A"), Some(vec![0x41, 0x00]));
        assert_eq!(big.encode("A"), Some(vec![0x00, 0x41]));
        assert_eq!(little.decode(&[0x41, 0x00]).as_deref(), Some("A"));
    }
}
