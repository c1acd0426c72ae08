//! ESC/POS sequence helpers
//!
//! Stateless functions that wrap caller content in command sequences.
//! Content is copied verbatim between the "on" and "off" directives; it is
//! expected to already be in the printer's code page (see [`crate::encode`]).
//!
//! The printer keeps alignment and color as device state. The wrapping
//! variants restore a fixed state afterwards: `left`/`right`/`center` go back
//! to left alignment and the color wrappers go back to black, whatever the
//! device was set to before the call.

use crate::barcode::BarcodeOptions;
use crate::commands::{self, join};
use crate::encoding::CodePage;
use crate::error::EscPosResult;
use tracing::{debug, instrument, warn};

/// PDF417 blocks whose pL byte exceeds this value mis-render on affected
/// firmware, so the data is padded up to the next 256 byte boundary.
const PDF417_MAX_LOW_BYTE: usize = 120;

/// Fixed header bytes counted in the PDF417 length prefix
const PDF417_HEADER_LEN: usize = 3;

/// Module width sent ahead of every PDF417 block
const PDF417_MODULE_WIDTH: u8 = 2;

/// Longest input [`pdf417`] can frame. Past this, padding plus the header
/// no longer fits the two byte length prefix.
pub const PDF417_MAX_DATA_LEN: usize = 255 * 256 + PDF417_MAX_LOW_BYTE;

#[inline]
fn wrap(on: &[u8], data: &[u8], off: &[u8]) -> Vec<u8> {
    join(&[on, data, off])
}

// === Text Style ===

/// Normal size text
pub fn plain_text(data: impl AsRef<[u8]>) -> Vec<u8> {
    wrap(commands::TXT_NORMAL, data.as_ref(), commands::TXT_NORMAL)
}

/// Double height, normal width
pub fn double_height(data: impl AsRef<[u8]>) -> Vec<u8> {
    wrap(commands::TXT_2HEIGHT, data.as_ref(), commands::TXT_NORMAL)
}

/// Double width, normal height
pub fn double_width(data: impl AsRef<[u8]>) -> Vec<u8> {
    wrap(commands::TXT_2WIDTH, data.as_ref(), commands::TXT_NORMAL)
}

/// Double width and double height
pub fn quad_size(data: impl AsRef<[u8]>) -> Vec<u8> {
    wrap(commands::TXT_4SQUARE, data.as_ref(), commands::TXT_NORMAL)
}

/// 1-dot underline
pub fn underline(data: impl AsRef<[u8]>) -> Vec<u8> {
    wrap(commands::TXT_UNDERL_ON, data.as_ref(), commands::TXT_UNDERL_OFF)
}

/// 2-dot underline
pub fn underline2(data: impl AsRef<[u8]>) -> Vec<u8> {
    wrap(commands::TXT_UNDERL2_ON, data.as_ref(), commands::TXT_UNDERL_OFF)
}

/// Emphasized
pub fn bold(data: impl AsRef<[u8]>) -> Vec<u8> {
    wrap(commands::TXT_BOLD_ON, data.as_ref(), commands::TXT_BOLD_OFF)
}

/// White on black
pub fn inverted(data: impl AsRef<[u8]>) -> Vec<u8> {
    wrap(commands::TXT_INVERT_ON, data.as_ref(), commands::TXT_INVERT_OFF)
}

pub use self::plain_text as text;
pub use self::quad_size as big;
pub use self::quad_size as title;
pub use self::quad_size as header;
pub use self::inverted as invert;
pub use self::underline as u;
pub use self::underline2 as u2;
pub use self::bold as b;
pub use self::quad_size as double_width_double_height;
pub use self::quad_size as double_height_double_width;

// === Alignment ===

/// Set left alignment for everything that follows
pub fn align_left() -> Vec<u8> {
    commands::sequence(commands::TXT_ALIGN_LT)
}

/// Set right alignment for everything that follows
pub fn align_right() -> Vec<u8> {
    commands::sequence(commands::TXT_ALIGN_RT)
}

/// Set center alignment for everything that follows
pub fn align_center() -> Vec<u8> {
    commands::sequence(commands::TXT_ALIGN_CT)
}

/// Left-aligned content, then left alignment again
pub fn left(data: impl AsRef<[u8]>) -> Vec<u8> {
    wrap(commands::TXT_ALIGN_LT, data.as_ref(), commands::TXT_ALIGN_LT)
}

/// Right-aligned content, then back to left alignment
pub fn right(data: impl AsRef<[u8]>) -> Vec<u8> {
    wrap(commands::TXT_ALIGN_RT, data.as_ref(), commands::TXT_ALIGN_LT)
}

/// Centered content, then back to left alignment
pub fn center(data: impl AsRef<[u8]>) -> Vec<u8> {
    wrap(commands::TXT_ALIGN_CT, data.as_ref(), commands::TXT_ALIGN_LT)
}

// === Color ===

/// Default color (black), then black again
pub fn color_black(data: impl AsRef<[u8]>) -> Vec<u8> {
    wrap(commands::TXT_COLOR_BLACK, data.as_ref(), commands::TXT_COLOR_BLACK)
}

/// Alternative color (red on two-color paper), then back to black
pub fn color_red(data: impl AsRef<[u8]>) -> Vec<u8> {
    wrap(commands::TXT_COLOR_RED, data.as_ref(), commands::TXT_COLOR_BLACK)
}

pub use self::color_black as default_color;
pub use self::color_red as alt_color;
pub use self::color_black as black_color;
pub use self::color_red as red_color;
pub use self::color_red as alternative_color;

// === Barcodes ===

/// Print a 1D barcode.
///
/// Options are validated before anything is emitted, so an error never
/// leaves a half-written sequence. The data itself is sent as-is; checking
/// it against the symbology's character set and check digit is up to the
/// caller.
///
/// # Errors
///
/// [`crate::EscPosError::InvalidArgument`] when the height is outside 1-255
/// or the width is outside 2-6.
#[instrument(skip(data), fields(data_len = data.as_ref().len()))]
pub fn barcode(data: impl AsRef<[u8]>, options: &BarcodeOptions) -> EscPosResult<Vec<u8>> {
    let (height, width) = options.validate()?;

    Ok(join(&[
        options.text_position.command(),
        commands::BARCODE_WIDTH,
        &[width],
        commands::BARCODE_HEIGHT,
        &[height],
        options.format.command(),
        data.as_ref(),
        &[0x00],
    ]))
}

/// Print a PDF417 symbol.
///
/// Emits `GS w 2`, then `GS ( k pL pH` followed directly by `data`. The
/// printer reads the first three data bytes as the function header
/// `cn fn m`, so the caller supplies them, e.g. `0x30 0x50 0x30` to store
/// symbol data, then the symbol content. The length prefix counts those
/// three bytes on top of `data`: `pL pH` encode `data.len() + 3` after
/// padding.
///
/// Data whose length modulo 256 is above 120 is right-padded with spaces to
/// the next multiple of 256, keeping pL at 3 for firmware that mis-renders
/// larger values.
///
/// Inputs longer than [`PDF417_MAX_DATA_LEN`] cannot be framed: pH is
/// truncated to its low byte and a warning is logged, so the printer will
/// misread the rest of the stream. Split such data before calling.
#[instrument(skip(data), fields(data_len = data.as_ref().len()))]
pub fn pdf417(data: impl AsRef<[u8]>) -> Vec<u8> {
    let data = data.as_ref();

    let remainder = data.len() % 256;
    let padded_len = if remainder > PDF417_MAX_LOW_BYTE {
        data.len() + (256 - remainder)
    } else {
        data.len()
    };
    if padded_len != data.len() {
        debug!(from = data.len(), to = padded_len, "padding pdf417 data");
    }

    let data_length = padded_len + PDF417_HEADER_LEN;
    let p_l = (data_length % 256) as u8;
    let p_h = data_length / 256;
    if p_h > usize::from(u8::MAX) {
        warn!(data_length, "pdf417 data too long for a two byte length prefix");
    }

    let mut buf = Vec::with_capacity(
        commands::BARCODE_WIDTH.len() + commands::BARCODE_PDF417.len() + 3 + padded_len,
    );
    buf.extend_from_slice(commands::BARCODE_WIDTH);
    buf.push(PDF417_MODULE_WIDTH);
    buf.extend_from_slice(commands::BARCODE_PDF417);
    buf.push(p_l);
    buf.push(p_h as u8);
    buf.extend_from_slice(data);
    buf.resize(buf.len() + (padded_len - data.len()), b' ');
    buf
}

// === Paper Control ===

/// Partial cut (leave a small connection)
pub fn partial_cut() -> Vec<u8> {
    commands::sequence(commands::PAPER_PARTIAL_CUT)
}

/// Full cut
pub fn full_cut() -> Vec<u8> {
    commands::sequence(commands::PAPER_FULL_CUT)
}

pub use self::full_cut as cut;

// === Cash Drawer ===

/// Kick both drawer connectors (pin 2, then pin 5).
///
/// Sending both means the caller does not need to know which connector the
/// drawer is wired to.
pub fn open_cash_drawer() -> Vec<u8> {
    join(&[commands::CD_KICK_2, &[0x00], commands::CD_KICK_5, &[0x00]])
}

// === Encoding ===

/// Select the printer's character code table
pub fn encoding(code_page: CodePage) -> Vec<u8> {
    join(&[commands::CP_SET, &[code_page.code()]])
}

pub use self::encoding as set_encoding;
pub use self::encoding as set_printer_encoding;

// === Raw Commands ===

/// Pass a caller-built command sequence through unchanged
pub fn raw(data: impl AsRef<[u8]>) -> Vec<u8> {
    commands::sequence(data.as_ref())
}
