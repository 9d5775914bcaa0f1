//! CNP (Romanian Personal Numeric Code) validation.

use super::patterns::CNP_FORMAT;

/// Control weights applied to the first 12 digits.
const CONTROL_WEIGHTS: [u32; 12] = [2, 7, 9, 1, 4, 6, 3, 5, 8, 2, 7, 9];

/// Validate a CNP using the control-digit algorithm.
///
/// The code must be exactly 13 ASCII digits with a first digit in 1-8.
/// The weighted sum of the first 12 digits modulo 11 gives the control
/// digit, with 10 mapped to 1.
pub fn is_valid_cnp(cnp: &str) -> bool {
    if !CNP_FORMAT.is_match(cnp) {
        return false;
    }

    let digits: Vec<u32> = cnp.chars().filter_map(|c| c.to_digit(10)).collect();

    let sum: u32 = digits
        .iter()
        .take(12)
        .zip(CONTROL_WEIGHTS.iter())
        .map(|(d, w)| d * w)
        .sum();

    let control = match sum % 11 {
        10 => 1,
        c => c,
    };

    control == digits[12]
}

/// Keep only ASCII digits, preserving order.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}
