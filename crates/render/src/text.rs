//! Width metrics for the built-in Helvetica face.
//!
//! The engine draws captions only, in base-14 Helvetica with WinAnsi
//! encoding, so the standard AFM advance widths are enough to center text
//! without a shaping pass.

/// Advance widths for ASCII 32..=126, in 1/1000 em units.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, // 'A'..'P'
    778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'Q'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, // 'a'..'p'
    556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'q'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Fallback advance for characters outside the table.
const DEFAULT_WIDTH: u32 = 556;

/// Approximate rendered width of `text` at `font_size` points.
pub(crate) fn text_width(text: &str, font_size: f32) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| {
            let code = c as u32;
            if (32..127).contains(&code) {
                HELVETICA_WIDTHS[(code - 32) as usize] as u32
            } else {
                DEFAULT_WIDTH
            }
        })
        .sum();
    units as f32 * font_size / 1000.0
}
