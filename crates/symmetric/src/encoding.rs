//! Base64 text encoding of cipher output
//!
//! Output always uses the standard alphabet with padding. Input is accepted
//! with or without trailing `=`, and ASCII whitespace anywhere in it (line
//! wrapping included) is skipped. Any other character outside the standard
//! alphabet is rejected.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::{DecodeError, Engine as _};

const LENIENT_PADDING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encodes raw cipher output as padded standard Base64
pub(crate) fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes standard Base64, tolerating missing padding and line breaks
pub(crate) fn decode(text: &str) -> Result<Vec<u8>, DecodeError> {
    if !text.bytes().any(|b| b.is_ascii_whitespace()) {
        return LENIENT_PADDING.decode(text);
    }
    let compact: Vec<u8> = text
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    LENIENT_PADDING.decode(compact)
}
