//! # escpos-helpers
//!
//! ESC/POS command sequences for receipt printers - byte composition only.
//!
//! ## Scope
//!
//! This crate builds the bytes:
//! - Text style, alignment and color wrappers
//! - 1D barcodes and PDF417
//! - Paper cut and cash drawer kick
//! - Code page selection and UTF-8 transcoding
//!
//! Sending them is left to the caller (TCP 9100, serial, spooler...). Every
//! function returns a flat `Vec<u8>` ready to be written to the device.
//!
//! ## Example
//!
//! ```ignore
//! use escpos_helpers::{BarcodeOptions, EscPosBuilder, TextPosition, bold, center};
//!
//! let mut builder = EscPosBuilder::new();
//! builder.line(center(bold("RECEIPT")));
//! builder.barcode(
//!     "4006381333931",
//!     &BarcodeOptions::new().with_text_position(TextPosition::Below),
//! )?;
//! builder.open_cash_drawer().partial_cut();
//!
//! transport.write_all(&builder.build())?;
//! ```

mod barcode;
pub mod commands;
mod encoding;
mod error;
mod escpos;
pub mod helpers;
mod job;

// Re-exports
pub use barcode::{BarcodeFormat, BarcodeOptions, BarcodeSettings, TextPosition};
pub use encoding::{CodePage, EncodeOptions, encode};
pub use error::{BarcodeField, EscPosError, EscPosResult};
pub use escpos::EscPosBuilder;
pub use helpers::*;
pub use job::{Align, Instruction, PrintJob, TextStyle};
