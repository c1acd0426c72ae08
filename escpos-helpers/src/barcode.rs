//! Barcode parameters
//!
//! Option types for [`crate::helpers::barcode`]. [`BarcodeSettings`] is the
//! JSON form used in print jobs and config files; it is checked when turned
//! into [`BarcodeOptions`], so bad values surface as
//! [`EscPosError::InvalidArgument`] rather than as parse errors.

use crate::commands;
use crate::error::{BarcodeField, EscPosError, EscPosResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the human readable interpretation (HRI) text is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextPosition {
    #[default]
    Off,
    Above,
    Below,
    Both,
}

impl TextPosition {
    /// GS H directive for this position
    pub fn command(self) -> &'static [u8] {
        match self {
            TextPosition::Off => commands::BARCODE_TXT_OFF,
            TextPosition::Above => commands::BARCODE_TXT_ABV,
            TextPosition::Below => commands::BARCODE_TXT_BLW,
            TextPosition::Both => commands::BARCODE_TXT_BTH,
        }
    }
}

impl FromStr for TextPosition {
    type Err = EscPosError;

    fn from_str(s: &str) -> EscPosResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(TextPosition::Off),
            "above" => Ok(TextPosition::Above),
            "below" => Ok(TextPosition::Below),
            "both" => Ok(TextPosition::Both),
            _ => Err(EscPosError::invalid(BarcodeField::TextPosition, s)),
        }
    }
}

impl fmt::Display for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextPosition::Off => "off",
            TextPosition::Above => "above",
            TextPosition::Below => "below",
            TextPosition::Both => "both",
        };
        f.write_str(name)
    }
}

/// 1D barcode symbology (GS k m)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarcodeFormat {
    UpcA,
    UpcE,
    #[default]
    Ean13,
    Ean8,
    Code39,
    Itf,
    /// NW-7 / Codabar
    Nw7,
}

impl BarcodeFormat {
    /// GS k prefix for this symbology
    pub fn command(self) -> &'static [u8] {
        match self {
            BarcodeFormat::UpcA => commands::BARCODE_UPC_A,
            BarcodeFormat::UpcE => commands::BARCODE_UPC_E,
            BarcodeFormat::Ean13 => commands::BARCODE_EAN13,
            BarcodeFormat::Ean8 => commands::BARCODE_EAN8,
            BarcodeFormat::Code39 => commands::BARCODE_CODE39,
            BarcodeFormat::Itf => commands::BARCODE_ITF,
            BarcodeFormat::Nw7 => commands::BARCODE_NW7,
        }
    }
}

/// Barcode rendering options
///
/// Defaults: no HRI text, 50 dots high, module width 3, EAN-13.
/// Height and width are stored as `i64` so out-of-range values, negative
/// ones included, reach [`BarcodeOptions::validate`] intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeOptions {
    pub text_position: TextPosition,
    /// Height in dots (1-255)
    pub height: i64,
    /// Module width (2-6)
    pub width: i64,
    pub format: BarcodeFormat,
}

impl Default for BarcodeOptions {
    fn default() -> Self {
        Self {
            text_position: TextPosition::Off,
            height: 50,
            width: 3,
            format: BarcodeFormat::Ean13,
        }
    }
}

impl BarcodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set where the HRI text goes
    pub fn with_text_position(mut self, text_position: TextPosition) -> Self {
        self.text_position = text_position;
        self
    }

    /// Set the height in dots
    pub fn with_height(mut self, height: i64) -> Self {
        self.height = height;
        self
    }

    /// Set the module width
    pub fn with_width(mut self, width: i64) -> Self {
        self.width = width;
        self
    }

    /// Set the symbology
    pub fn with_format(mut self, format: BarcodeFormat) -> Self {
        self.format = format;
        self
    }

    /// Check height then width, returning the parameter bytes on success.
    pub fn validate(&self) -> EscPosResult<(u8, u8)> {
        let height = u8::try_from(self.height)
            .ok()
            .filter(|h| *h >= 1)
            .ok_or_else(|| EscPosError::invalid(BarcodeField::Height, self.height))?;
        let width = u8::try_from(self.width)
            .ok()
            .filter(|w| (2..=6).contains(w))
            .ok_or_else(|| EscPosError::invalid(BarcodeField::Width, self.width))?;
        Ok((height, width))
    }
}

/// Barcode options as written in JSON
///
/// Every field is optional and falls back to the [`BarcodeOptions`] default.
/// Values are kept as written; [`BarcodeSettings::to_options`] checks them
/// in the same order as [`crate::helpers::barcode`]: text position, height,
/// then width.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarcodeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<BarcodeFormat>,
}

impl BarcodeSettings {
    /// Resolve defaults and validate.
    ///
    /// # Errors
    ///
    /// [`EscPosError::InvalidArgument`] naming the first bad field.
    pub fn to_options(&self) -> EscPosResult<BarcodeOptions> {
        let defaults = BarcodeOptions::default();
        let text_position = match &self.text_position {
            Some(value) => value.parse()?,
            None => defaults.text_position,
        };
        let options = BarcodeOptions {
            text_position,
            height: self.height.unwrap_or(defaults.height),
            width: self.width.unwrap_or(defaults.width),
            format: self.format.unwrap_or(defaults.format),
        };
        options.validate()?;
        Ok(options)
    }
}

impl From<BarcodeOptions> for BarcodeSettings {
    fn from(options: BarcodeOptions) -> Self {
        Self {
            text_position: Some(options.text_position.to_string()),
            height: Some(options.height),
            width: Some(options.width),
            format: Some(options.format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(json: &str) -> BarcodeSettings {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_text_position_parse() {
        assert_eq!("off".parse::<TextPosition>().unwrap(), TextPosition::Off);
        assert_eq!("ABOVE".parse::<TextPosition>().unwrap(), TextPosition::Above);
        assert_eq!("Below".parse::<TextPosition>().unwrap(), TextPosition::Below);
        assert_eq!("both".parse::<TextPosition>().unwrap(), TextPosition::Both);
    }

    #[test]
    fn test_text_position_rejects_unknown() {
        let err = "bogus".parse::<TextPosition>().unwrap_err();
        match err {
            EscPosError::InvalidArgument { field, value, .. } => {
                assert_eq!(field, BarcodeField::TextPosition);
                assert_eq!(value, "bogus");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_text_position_commands() {
        assert_eq!(TextPosition::Off.command(), &[0x1D, 0x48, 0x00]);
        assert_eq!(TextPosition::Both.command(), &[0x1D, 0x48, 0x03]);
    }

    #[test]
    fn test_options_defaults() {
        let opts = BarcodeOptions::default();
        assert_eq!(opts.text_position, TextPosition::Off);
        assert_eq!(opts.height, 50);
        assert_eq!(opts.width, 3);
        assert_eq!(opts.format, BarcodeFormat::Ean13);
        assert_eq!(opts.validate().unwrap(), (50, 3));
    }

    #[test]
    fn test_validate_height_before_width() {
        let err = BarcodeOptions::new()
            .with_height(0)
            .with_width(9)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), Some(BarcodeField::Height));
    }

    #[test]
    fn test_validate_bounds() {
        for height in [1, 255] {
            assert!(BarcodeOptions::new().with_height(height).validate().is_ok());
        }
        for height in [-1, 0, 256, 70_000] {
            assert!(BarcodeOptions::new().with_height(height).validate().is_err());
        }
        for width in 2..=6 {
            assert!(BarcodeOptions::new().with_width(width).validate().is_ok());
        }
        for width in [-3, 0, 1, 7] {
            assert!(BarcodeOptions::new().with_width(width).validate().is_err());
        }
    }

    #[test]
    fn test_settings_from_json() {
        let opts = settings(r#"{"text_position":"below","format":"code39","height":80}"#)
            .to_options()
            .unwrap();
        assert_eq!(opts.text_position, TextPosition::Below);
        assert_eq!(opts.format, BarcodeFormat::Code39);
        assert_eq!(opts.height, 80);
        assert_eq!(opts.width, 3);
    }

    #[test]
    fn test_settings_empty_uses_defaults() {
        assert_eq!(settings("{}").to_options().unwrap(), BarcodeOptions::default());
    }

    #[test]
    fn test_settings_bogus_position_is_invalid_argument() {
        let err = settings(r#"{"text_position":"bogus","height":0}"#)
            .to_options()
            .unwrap_err();
        match err {
            EscPosError::InvalidArgument { field, value, .. } => {
                assert_eq!(field, BarcodeField::TextPosition);
                assert_eq!(value, "bogus");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_settings_out_of_range_is_invalid_argument() {
        let cases = [
            (r#"{"height":70000}"#, BarcodeField::Height, "70000"),
            (r#"{"height":-1}"#, BarcodeField::Height, "-1"),
            (r#"{"width":300}"#, BarcodeField::Width, "300"),
            (r#"{"width":-2}"#, BarcodeField::Width, "-2"),
        ];
        for (json, expected_field, expected_value) in cases {
            let err = settings(json).to_options().unwrap_err();
            assert_eq!(err.field(), Some(expected_field), "{json}");
            match err {
                EscPosError::InvalidArgument { value, .. } => assert_eq!(value, expected_value),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_settings_from_options() {
        let opts = BarcodeOptions::new()
            .with_text_position(TextPosition::Both)
            .with_width(2);
        let settings = BarcodeSettings::from(opts);
        assert_eq!(settings.text_position.as_deref(), Some("both"));
        assert_eq!(settings.to_options().unwrap(), opts);
    }
}
