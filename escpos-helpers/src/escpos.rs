//! ESC/POS document builder
//!
//! Provides a fluent API for collecting helper output into one print job.

use crate::barcode::BarcodeOptions;
use crate::commands;
use crate::encoding::CodePage;
use crate::error::EscPosResult;
use crate::helpers;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// ESC/POS document builder
///
/// Accumulates command sequences for a single job. The buffer always starts
/// with ESC @ so the job does not inherit styles left on the printer.
///
/// ```ignore
/// use escpos_helpers::{EscPosBuilder, bold, center};
///
/// let mut builder = EscPosBuilder::new();
/// builder
///     .write(center(bold("RECEIPT")))
///     .line("2x Coffee      7.00")
///     .pdf417("ORDER-1042")
///     .feed(3)
///     .partial_cut();
/// let bytes = builder.build();
/// ```
#[derive(Debug, Clone)]
pub struct EscPosBuilder {
    buf: Vec<u8>,
}

impl EscPosBuilder {
    pub fn new() -> Self {
        let mut buf = Vec::with_capacity(4096);
        buf.extend_from_slice(commands::HW_INIT);
        Self { buf }
    }

    // === Output ===

    /// Append bytes as-is (helper output or pre-encoded text)
    pub fn write(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        self.buf.extend_from_slice(data.as_ref());
        self
    }

    /// Append bytes followed by a line feed
    pub fn line(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        self.write(data);
        self.buf.extend_from_slice(commands::CTL_LF);
        self
    }

    /// Print and feed n lines
    pub fn feed(&mut self, lines: u8) -> &mut Self {
        self.buf.extend_from_slice(commands::HW_FEED);
        self.buf.push(lines);
        self
    }

    pub fn encoding(&mut self, code_page: CodePage) -> &mut Self {
        self.write(helpers::encoding(code_page))
    }

    // === Barcodes ===

    /// Append a 1D barcode. Nothing is written if the options are invalid.
    pub fn barcode(
        &mut self,
        data: impl AsRef<[u8]>,
        options: &BarcodeOptions,
    ) -> EscPosResult<&mut Self> {
        let seq = helpers::barcode(data, options)?;
        Ok(self.write(seq))
    }

    pub fn pdf417(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        self.write(helpers::pdf417(data))
    }

    // === Paper Control ===

    pub fn cut(&mut self) -> &mut Self {
        self.write(helpers::full_cut())
    }

    pub fn partial_cut(&mut self) -> &mut Self {
        self.write(helpers::partial_cut())
    }

    pub fn open_cash_drawer(&mut self) -> &mut Self {
        self.write(helpers::open_cash_drawer())
    }

    // === Build ===

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Base64 of the job, for transports that only carry text
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.buf)
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

impl Default for EscPosBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BarcodeField;

    #[test]
    fn test_builder_starts_with_init() {
        let b = EscPosBuilder::new();
        assert_eq!(b.as_bytes(), commands::HW_INIT);
        assert!(!b.is_empty());
    }

    #[test]
    fn test_builder_basic() {
        let mut b = EscPosBuilder::new();
        b.write(helpers::center("Title")).line("Body").cut();

        let data = b.build();
        let mut expected = commands::HW_INIT.to_vec();
        expected.extend(helpers::center("Title"));
        expected.extend_from_slice(b"Body\n");
        expected.extend(helpers::full_cut());
        assert_eq!(data, expected);
    }

    #[test]
    fn test_feed() {
        let mut b = EscPosBuilder::new();
        b.feed(4);
        assert_eq!(&b.as_bytes()[2..], &[0x1B, 0x64, 4]);
    }

    #[test]
    fn test_invalid_barcode_writes_nothing() {
        let mut b = EscPosBuilder::new();
        let before = b.len();
        let err = b
            .barcode("123", &BarcodeOptions::new().with_width(9))
            .unwrap_err();
        assert_eq!(err.field(), Some(BarcodeField::Width));
        assert_eq!(b.len(), before);
    }

    #[test]
    fn test_to_base64() {
        let b = EscPosBuilder::new();
        // ESC @ = 0x1B 0x40
        assert_eq!(b.to_base64(), "G0A=");
    }
}
