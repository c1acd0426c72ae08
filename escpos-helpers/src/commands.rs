//! ESC/POS command table
//!
//! Fixed byte sequences from the Epson ESC/POS command reference.
//! Everything here is plain `const` data; the helpers in [`crate::helpers`]
//! splice these around caller content.

// === Control Characters ===

/// Print and line feed
pub const CTL_LF: &[u8] = &[0x0A];
/// Form feed
pub const CTL_FF: &[u8] = &[0x0C];
/// Carriage return
pub const CTL_CR: &[u8] = &[0x0D];
/// Horizontal tab
pub const CTL_HT: &[u8] = &[0x09];

// === Printer Hardware ===

/// ESC @ - Clear buffer and reset modes
pub const HW_INIT: &[u8] = &[0x1B, 0x40];
/// ESC = 1 - Select printer
pub const HW_SELECT: &[u8] = &[0x1B, 0x3D, 0x01];
/// ESC d - Print and feed n lines (followed by n)
pub const HW_FEED: &[u8] = &[0x1B, 0x64];

// === Cash Drawer ===

/// ESC p 0 - Pulse on connector pin 2 (followed by t1)
pub const CD_KICK_2: &[u8] = &[0x1B, 0x70, 0x00];
/// ESC p 1 - Pulse on connector pin 5 (followed by t1)
pub const CD_KICK_5: &[u8] = &[0x1B, 0x70, 0x01];

// === Paper ===

/// GS V 0 - Full cut
pub const PAPER_FULL_CUT: &[u8] = &[0x1D, 0x56, 0x00];
/// GS V 1 - Partial cut (leaves one point uncut)
pub const PAPER_PARTIAL_CUT: &[u8] = &[0x1D, 0x56, 0x01];

// === Text Format ===

/// ESC ! 0 - Normal size
pub const TXT_NORMAL: &[u8] = &[0x1B, 0x21, 0x00];
/// ESC ! 16 - Double height
pub const TXT_2HEIGHT: &[u8] = &[0x1B, 0x21, 0x10];
/// ESC ! 32 - Double width
pub const TXT_2WIDTH: &[u8] = &[0x1B, 0x21, 0x20];
/// ESC ! 48 - Double width and height
pub const TXT_4SQUARE: &[u8] = &[0x1B, 0x21, 0x30];

/// ESC - 0 - Underline off
pub const TXT_UNDERL_OFF: &[u8] = &[0x1B, 0x2D, 0x00];
/// ESC - 1 - Underline, 1 dot thick
pub const TXT_UNDERL_ON: &[u8] = &[0x1B, 0x2D, 0x01];
/// ESC - 2 - Underline, 2 dots thick
pub const TXT_UNDERL2_ON: &[u8] = &[0x1B, 0x2D, 0x02];

/// ESC E 0 - Emphasis off
pub const TXT_BOLD_OFF: &[u8] = &[0x1B, 0x45, 0x00];
/// ESC E 1 - Emphasis on
pub const TXT_BOLD_ON: &[u8] = &[0x1B, 0x45, 0x01];

/// ESC M 0 - Font A
pub const TXT_FONT_A: &[u8] = &[0x1B, 0x4D, 0x00];
/// ESC M 1 - Font B
pub const TXT_FONT_B: &[u8] = &[0x1B, 0x4D, 0x01];

/// GS B 1 - White/black reverse printing on
pub const TXT_INVERT_ON: &[u8] = &[0x1D, 0x42, 0x01];
/// GS B 0 - Reverse printing off
pub const TXT_INVERT_OFF: &[u8] = &[0x1D, 0x42, 0x00];

/// ESC r 0 - Default color (black)
pub const TXT_COLOR_BLACK: &[u8] = &[0x1B, 0x72, 0x00];
/// ESC r 1 - Alternative color (usually red)
pub const TXT_COLOR_RED: &[u8] = &[0x1B, 0x72, 0x01];

// === Alignment ===

/// ESC a 0
pub const TXT_ALIGN_LT: &[u8] = &[0x1B, 0x61, 0x00];
/// ESC a 1
pub const TXT_ALIGN_CT: &[u8] = &[0x1B, 0x61, 0x01];
/// ESC a 2
pub const TXT_ALIGN_RT: &[u8] = &[0x1B, 0x61, 0x02];

// === Barcodes ===

/// GS H 0 - HRI characters not printed
pub const BARCODE_TXT_OFF: &[u8] = &[0x1D, 0x48, 0x00];
/// GS H 1 - HRI above the barcode
pub const BARCODE_TXT_ABV: &[u8] = &[0x1D, 0x48, 0x01];
/// GS H 2 - HRI below the barcode
pub const BARCODE_TXT_BLW: &[u8] = &[0x1D, 0x48, 0x02];
/// GS H 3 - HRI above and below
pub const BARCODE_TXT_BTH: &[u8] = &[0x1D, 0x48, 0x03];

/// GS f 0 - HRI font A
pub const BARCODE_FONT_A: &[u8] = &[0x1D, 0x66, 0x00];
/// GS f 1 - HRI font B
pub const BARCODE_FONT_B: &[u8] = &[0x1D, 0x66, 0x01];

/// GS h - Barcode height in dots, followed by n (1-255)
pub const BARCODE_HEIGHT: &[u8] = &[0x1D, 0x68];
/// GS w - Barcode module width, followed by n (2-6)
pub const BARCODE_WIDTH: &[u8] = &[0x1D, 0x77];

// GS k m - Barcode symbology prefixes (data follows, NUL terminated)

/// GS k 0 - UPC-A
pub const BARCODE_UPC_A: &[u8] = &[0x1D, 0x6B, 0x00];
/// GS k 1 - UPC-E
pub const BARCODE_UPC_E: &[u8] = &[0x1D, 0x6B, 0x01];
/// GS k 2 - EAN-13
pub const BARCODE_EAN13: &[u8] = &[0x1D, 0x6B, 0x02];
/// GS k 3 - EAN-8
pub const BARCODE_EAN8: &[u8] = &[0x1D, 0x6B, 0x03];
/// GS k 4 - CODE39
pub const BARCODE_CODE39: &[u8] = &[0x1D, 0x6B, 0x04];
/// GS k 5 - ITF (interleaved 2 of 5)
pub const BARCODE_ITF: &[u8] = &[0x1D, 0x6B, 0x05];
/// GS k 6 - NW7 (Codabar)
pub const BARCODE_NW7: &[u8] = &[0x1D, 0x6B, 0x06];

/// GS ( k - 2D symbol function prefix, followed by pL pH and the payload
pub const BARCODE_PDF417: &[u8] = &[0x1D, 0x28, 0x6B];

// === Code Pages ===

/// ESC t - Select character code table, followed by n
pub const CP_SET: &[u8] = &[0x1B, 0x74];

/// Copy a list of byte values into an owned command sequence.
///
/// This is the only "encoder" the helpers need: every table entry and every
/// computed parameter byte already fits in a `u8`.
#[inline]
pub fn sequence(codes: &[u8]) -> Vec<u8> {
    codes.to_vec()
}

/// Concatenate command sequences and content into one buffer.
pub(crate) fn join(parts: &[&[u8]]) -> Vec<u8> {
    let len = parts.iter().map(|p| p.len()).sum();
    let mut buf = Vec::with_capacity(len);
    for part in parts {
        buf.extend_from_slice(part);
    }
    buf
}
