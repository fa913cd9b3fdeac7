//! Decimal text formatting for the serial report loop.
//!
//! The report loop prints each raw axis byte as a fixed-width decimal field.
//! Formatting is plain digit arithmetic so no `core::fmt` machinery ends up
//! in the firmware image.

/// Buffer size large enough for any formatted `u16`.
pub const DECIMAL_BUF_LEN: usize = 5;

/// Minimum number of digits emitted, padded with leading zeros.
pub const MIN_DIGITS: usize = 4;

/// Formats `value` as ASCII decimal digits, zero-padded to at least four.
///
/// Values above 9999 widen to five digits; the legacy firmware silently
/// dropped the ten-thousands place instead.
pub fn format_decimal(value: u16, buf: &mut [u8; DECIMAL_BUF_LEN]) -> &[u8] {
    let mut cursor = DECIMAL_BUF_LEN;
    let mut rest = value;
    loop {
        cursor -= 1;
        buf[cursor] = b'0' + (rest % 10) as u8;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    while DECIMAL_BUF_LEN - cursor < MIN_DIGITS {
        cursor -= 1;
        buf[cursor] = b'0';
    }

    &buf[cursor..]
}
