//! NFe access key parsing and structural field decoding.
//!
//! The chave de acesso is a 44-digit identifier encoding the issuing state,
//! emission date, issuer CNPJ and document sequence of an NFe. Fields live at
//! fixed byte offsets (0-indexed, half-open):
//!
//! | Field          | Range  |
//! |----------------|--------|
//! | UF code        | 0..2   |
//! | Emission year  | 2..4   |
//! | Emission month | 4..6   |
//! | Issuer CNPJ    | 6..20  |
//! | Document model | 20..22 |
//! | Series         | 22..25 |
//! | Invoice number | 25..34 |
//!
//! The remaining digits (34..44) are check digits and emission codes; they
//! are not decoded here.

use std::fmt;

use crate::error::{CoreError, Result};

/// Total number of digits in an NFe access key.
pub const ACCESS_KEY_LEN: usize = 44;

/// A validated 44-digit NFe access key.
///
/// A value of this type only exists after passing [`AccessKey::parse`]:
/// exactly 44 ASCII decimal digits. Downstream code never re-validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessKey(String);

/// Structural fields decoded from an access key.
///
/// Slices of the canonical digit string; leading zeros are preserved here
/// and only stripped by the presentation helpers in [`crate::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyFields<'a> {
    /// Issuing state (UF) code
    pub uf_code: &'a str,
    /// Two-digit emission year
    pub emission_year: &'a str,
    /// Two-digit emission month
    pub emission_month: &'a str,
    /// Issuer CNPJ (14 digits)
    pub issuer_cnpj: &'a str,
    /// Invoice model code
    pub document_model: &'a str,
    /// Invoice series (3 digits)
    pub series: &'a str,
    /// Invoice sequence number (9 digits)
    pub number: &'a str,
}

impl AccessKey {
    /// Validate an input string as an access key.
    ///
    /// Anything that is not exactly 44 decimal digits is rejected before it
    /// can reach lookup or conversion logic.
    pub fn parse(input: &str) -> Result<Self> {
        if input.len() != ACCESS_KEY_LEN || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidAccessKey(
                "access key must contain exactly 44 numeric digits".to_string(),
            ));
        }
        Ok(Self(input.to_string()))
    }

    /// Canonical digit string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the fixed-offset structural fields.
    pub fn fields(&self) -> KeyFields<'_> {
        let k = self.0.as_str();
        KeyFields {
            uf_code: &k[0..2],
            emission_year: &k[2..4],
            emission_month: &k[4..6],
            issuer_cnpj: &k[6..20],
            document_model: &k[20..22],
            series: &k[22..25],
            number: &k[25..34],
        }
    }
}

impl fmt::Display for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_KEY: &str = "35200114200166000187550010000000046550000046";

    #[test]
    fn test_parse_valid_key() {
        let key = AccessKey::parse(SAMPLE_KEY).unwrap();
        assert_eq!(key.as_str(), SAMPLE_KEY);
        assert_eq!(key.to_string(), SAMPLE_KEY);
    }

    #[test]
    fn test_rejects_wrong_length() {
        let too_long = format!("{SAMPLE_KEY}0");
        for input in ["", "123", &SAMPLE_KEY[..43], too_long.as_str()] {
            let err = AccessKey::parse(input).unwrap_err();
            assert!(err.to_string().contains("44 numeric digits"), "{input:?}");
        }
    }

    #[test]
    fn test_rejects_non_digit_characters() {
        let mut with_letter = SAMPLE_KEY.to_string();
        with_letter.replace_range(10..11, "a");
        assert!(AccessKey::parse(&with_letter).is_err());

        let mut with_space = SAMPLE_KEY.to_string();
        with_space.replace_range(0..1, " ");
        assert!(AccessKey::parse(&with_space).is_err());
    }

    #[test]
    fn test_field_offsets() {
        let key = AccessKey::parse(SAMPLE_KEY).unwrap();
        let fields = key.fields();
        assert_eq!(fields.uf_code, "35");
        assert_eq!(fields.emission_year, "20");
        assert_eq!(fields.emission_month, "01");
        assert_eq!(fields.issuer_cnpj, "14200166000187");
        assert_eq!(fields.document_model, "55");
        assert_eq!(fields.series, "001");
        assert_eq!(fields.number, "000000004");
    }

    #[test]
    fn test_decoding_is_pure() {
        let a = AccessKey::parse(SAMPLE_KEY).unwrap();
        let b = AccessKey::parse(SAMPLE_KEY).unwrap();
        assert_eq!(a.fields(), b.fields());
    }
}
