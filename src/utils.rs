//! Utilities to help working with header values

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::errors::DecodeError;

/// Standard alphabet, accepting values with or without `=` padding
const HEADER_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode a base64 header value, skipping folding whitespace
pub(crate) fn decode_header_base64(header: &str) -> Result<Vec<u8>, DecodeError> {
    let compact: Vec<u8> = header
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    if compact.is_empty() {
        return Err(DecodeError::Empty);
    }

    let decoded = HEADER_ENGINE.decode(compact)?;
    if decoded.is_empty() {
        return Err(DecodeError::NoData);
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_optional() {
        assert_eq!(decode_header_base64("AQI=").unwrap(), vec![1, 2]);
        assert_eq!(decode_header_base64("AQI").unwrap(), vec![1, 2]);
    }

    #[test]
    fn folded_value() {
        assert_eq!(decode_header_base64(" AQ\r\n\tI=\r\n").unwrap(), vec![1, 2]);
    }

    #[test]
    fn empty_values() {
        assert_eq!(decode_header_base64(""), Err(DecodeError::Empty));
        assert_eq!(decode_header_base64(" \r\n "), Err(DecodeError::Empty));
    }

    #[test]
    fn invalid_characters() {
        assert!(matches!(
            decode_header_base64("not base64!"),
            Err(DecodeError::Base64(_))
        ));
    }
}
