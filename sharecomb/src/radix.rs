use rug::Integer;
use sharecomb_traits::ReconstructionError;

/// The smallest supported base.
pub const MIN_BASE: u32 = 2;

/// The largest supported base: ten decimal digits plus twenty-six letters.
pub const MAX_BASE: u32 = 36;

/// The value of `character` as a digit, with letters case-insensitively mapping to 10–35.
/// Returns `None` for anything that is not an ASCII alphanumeric.
fn digit_value(character: char) -> Option<u32> {
    match character {
        '0'..='9' => Some(character as u32 - '0' as u32),
        'a'..='z' => Some(character as u32 - 'a' as u32 + 10),
        'A'..='Z' => Some(character as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Decodes a numeral string in the given `base` into an exact non-negative integer.
///
/// Characters are processed most-significant first, folding each digit into an
/// arbitrary-precision accumulator, so values of any magnitude decode without truncation.
/// No sign character, radix prefix or separator is accepted. A base outside $[2, 36]$, an
/// empty value, or a character whose digit value is not strictly below `base` is rejected.
pub fn decode(value: &str, base: u32) -> Result<Integer, ReconstructionError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(ReconstructionError::InvalidBase { base });
    }

    if value.is_empty() {
        return Err(ReconstructionError::EmptyValue);
    }

    let mut accumulator = Integer::new();

    for character in value.chars() {
        let digit = digit_value(character)
            .filter(|digit| *digit < base)
            .ok_or(ReconstructionError::InvalidDigit { character, base })?;

        accumulator = accumulator * base + digit;
    }

    Ok(accumulator)
}

/// Decodes like [`decode`] but without any validation, faithfully reproducing the behavior
/// of the original reconstruction script: ASCII decimal digits map to 0–9 and every other
/// character falls into the letter branch, contributing its lowercased distance from `'a'`
/// plus ten. A digit value at or above `base` (for example `'9'` in base 2) is accepted
/// silently and contributes an out-of-range magnitude, so the result is only meaningful for
/// pre-validated input.
pub fn decode_permissive(value: &str, base: u32) -> Integer {
    let mut accumulator = Integer::new();

    for character in value.chars() {
        let digit = if character.is_ascii_digit() {
            character as i64 - '0' as i64
        } else {
            character.to_ascii_lowercase() as i64 - 'a' as i64 + 10
        };

        accumulator = accumulator * base + digit;
    }

    accumulator
}
