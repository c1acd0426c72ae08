//! JSON print jobs
//!
//! A print job is a serializable list of instructions rendered through
//! [`EscPosBuilder`]. Useful when receipt layout is produced by another
//! service and only the bytes are built here.
//!
//! ```json
//! {
//!   "code_page": "wpc1252",
//!   "instructions": [
//!     { "op": "text", "text": "Café", "styles": ["bold", "quad_size"], "align": "center" },
//!     { "op": "barcode", "data": "4006381333931", "text_position": "below" },
//!     { "op": "feed", "lines": 3 },
//!     { "op": "partial_cut" }
//!   ]
//! }
//! ```

use crate::barcode::BarcodeSettings;
use crate::encoding::{CodePage, EncodeOptions, encode};
use crate::error::EscPosResult;
use crate::escpos::EscPosBuilder;
use crate::helpers;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Text style applied by a `text` instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Bold,
    Underline,
    Underline2,
    DoubleHeight,
    DoubleWidth,
    QuadSize,
    Inverted,
    Red,
}

impl TextStyle {
    fn apply(self, data: &[u8]) -> Vec<u8> {
        match self {
            TextStyle::Bold => helpers::bold(data),
            TextStyle::Underline => helpers::underline(data),
            TextStyle::Underline2 => helpers::underline2(data),
            TextStyle::DoubleHeight => helpers::double_height(data),
            TextStyle::DoubleWidth => helpers::double_width(data),
            TextStyle::QuadSize => helpers::quad_size(data),
            TextStyle::Inverted => helpers::inverted(data),
            TextStyle::Red => helpers::color_red(data),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// One step of a print job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instruction {
    /// A line of text; styles nest in order, the first one outermost
    Text {
        text: String,
        #[serde(default)]
        styles: Vec<TextStyle>,
        #[serde(default)]
        align: Option<Align>,
        #[serde(default = "default_newline")]
        newline: bool,
    },
    Feed {
        lines: u8,
    },
    Barcode {
        data: String,
        #[serde(flatten)]
        options: BarcodeSettings,
    },
    Pdf417 {
        data: String,
    },
    Cut,
    PartialCut,
    OpenCashDrawer,
    /// Pre-built command bytes
    Raw {
        bytes: Vec<u8>,
    },
}

fn default_newline() -> bool {
    true
}

/// Serializable print job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrintJob {
    /// Code page selected at the start of the job and used for text
    #[serde(default)]
    pub code_page: Option<CodePage>,
    /// Substitute for characters the code page cannot represent
    #[serde(default)]
    pub replacement: Option<char>,
    pub instructions: Vec<Instruction>,
}

impl PrintJob {
    pub fn from_json(json: &str) -> EscPosResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the job to ESC/POS bytes.
    ///
    /// # Errors
    ///
    /// Stops at the first barcode with invalid options and returns
    /// [`crate::EscPosError::InvalidArgument`]; no bytes are returned in
    /// that case.
    pub fn render(&self) -> EscPosResult<Vec<u8>> {
        self.to_builder().map(EscPosBuilder::build)
    }

    /// Render the job into a builder, e.g. to append more or take base64.
    #[instrument(skip(self), fields(instructions = self.instructions.len()))]
    pub fn to_builder(&self) -> EscPosResult<EscPosBuilder> {
        let mut builder = EscPosBuilder::new();

        let encode_options = match self.code_page {
            Some(code_page) => {
                builder.encoding(code_page);
                let options = code_page.encoding().map(EncodeOptions::new);
                if options.is_none() {
                    warn!(?code_page, "no transcoder for code page, text sent as UTF-8");
                }
                options
            }
            None => None,
        }
        .map(|opts| match self.replacement {
            Some(c) => opts.with_replacement(c),
            None => opts,
        });

        for instruction in &self.instructions {
            match instruction {
                Instruction::Text {
                    text,
                    styles,
                    align,
                    newline,
                } => {
                    let mut data = match &encode_options {
                        Some(opts) => encode(text, opts),
                        None => text.as_bytes().to_vec(),
                    };
                    for style in styles.iter().rev() {
                        data = style.apply(&data);
                    }
                    data = match align {
                        Some(Align::Left) => helpers::left(&data),
                        Some(Align::Center) => helpers::center(&data),
                        Some(Align::Right) => helpers::right(&data),
                        None => data,
                    };
                    if *newline {
                        builder.line(data);
                    } else {
                        builder.write(data);
                    }
                }
                Instruction::Feed { lines } => {
                    builder.feed(*lines);
                }
                Instruction::Barcode { data, options } => {
                    builder.barcode(data, &options.to_options()?)?;
                }
                Instruction::Pdf417 { data } => {
                    builder.pdf417(data);
                }
                Instruction::Cut => {
                    builder.cut();
                }
                Instruction::PartialCut => {
                    builder.partial_cut();
                }
                Instruction::OpenCashDrawer => {
                    builder.open_cash_drawer();
                }
                Instruction::Raw { bytes } => {
                    builder.write(bytes);
                }
            }
        }

        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barcode::{BarcodeOptions, TextPosition};
    use crate::commands;
    use crate::error::{BarcodeField, EscPosError};

    #[test]
    fn test_parse_instructions() {
        let job = PrintJob::from_json(
            r#"{
                "instructions": [
                    { "op": "text", "text": "Hi" },
                    { "op": "feed", "lines": 2 },
                    { "op": "cut" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(job.code_page, None);
        assert_eq!(
            job.instructions,
            vec![
                Instruction::Text {
                    text: "Hi".into(),
                    styles: vec![],
                    align: None,
                    newline: true,
                },
                Instruction::Feed { lines: 2 },
                Instruction::Cut,
            ]
        );
    }

    #[test]
    fn test_styles_nest_first_outermost() {
        let job = PrintJob {
            instructions: vec![Instruction::Text {
                text: "X".into(),
                styles: vec![TextStyle::Bold, TextStyle::Underline],
                align: Some(Align::Center),
                newline: false,
            }],
            ..Default::default()
        };

        let out = job.render().unwrap();
        let expected = [
            commands::HW_INIT.to_vec(),
            helpers::center(helpers::bold(helpers::underline("X"))),
        ]
        .concat();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_code_page_selected_and_applied() {
        let job = PrintJob {
            code_page: Some(CodePage::Wpc1252),
            replacement: Some('#'),
            instructions: vec![Instruction::Text {
                text: "é日".into(),
                styles: vec![],
                align: None,
                newline: true,
            }],
        };

        let out = job.render().unwrap();
        let expected = [commands::HW_INIT, &[0x1B, 0x74, 16], &[0xE9, b'#', b'\n']].concat();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_bad_barcode_fails_whole_job() {
        let job = PrintJob::from_json(
            r#"{
                "instructions": [
                    { "op": "text", "text": "before" },
                    { "op": "barcode", "data": "123", "height": 0 }
                ]
            }"#,
        )
        .unwrap();

        let err = job.render().unwrap_err();
        assert_eq!(err.field(), Some(BarcodeField::Height));
    }

    #[test]
    fn test_barcode_values_checked_at_render() {
        let cases = [
            (r#""height": 70000"#, BarcodeField::Height),
            (r#""height": -1"#, BarcodeField::Height),
            (r#""width": 300"#, BarcodeField::Width),
            (r#""text_position": "bogus", "height": 0"#, BarcodeField::TextPosition),
        ];
        for (fields, expected) in cases {
            let json = format!(
                r#"{{ "instructions": [ {{ "op": "barcode", "data": "123", {fields} }} ] }}"#
            );
            let job = PrintJob::from_json(&json).unwrap();
            let err = job.render().unwrap_err();
            assert!(matches!(err, EscPosError::InvalidArgument { .. }), "{fields}: {err}");
            assert_eq!(err.field(), Some(expected), "{fields}");
        }
    }

    #[test]
    fn test_barcode_settings_render() {
        let job = PrintJob::from_json(
            r#"{ "instructions": [
                { "op": "barcode", "data": "4006381333931", "text_position": "below", "height": 80 }
            ] }"#,
        )
        .unwrap();
        let options = BarcodeOptions::new()
            .with_text_position(TextPosition::Below)
            .with_height(80);
        let expected = [
            commands::HW_INIT.to_vec(),
            helpers::barcode("4006381333931", &options).unwrap(),
        ]
        .concat();
        assert_eq!(job.render().unwrap(), expected);
    }

    #[test]
    fn test_cyrillic_code_page_selected() {
        let job = PrintJob::from_json(
            r#"{ "code_page": "wpc1251", "instructions": [ { "op": "text", "text": "Да", "newline": false } ] }"#,
        )
        .unwrap();
        let expected = [commands::HW_INIT, &[0x1B, 0x74, 46], &[0xC4, 0xE0]].concat();
        assert_eq!(job.render().unwrap(), expected);
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        let err = PrintJob::from_json(r#"{ "instructions": [ { "op": "fax" } ] }"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid print job"));
    }
}
