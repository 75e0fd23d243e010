//! Positional base-62 encoding of `u64` identifiers.
//!
//! The alphabet is `0-9`, then `a-z`, then `A-Z`. Every code issued so far
//! depends on this exact ordering, so it must never change.

use crate::error::DecodeError;

/// The 62 symbols, in digit-value order.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = 62;

/// Longest possible encoding of a `u64` (`u64::MAX` is `"lYGhA16ahyf"`).
pub const MAX_ENCODED_LEN: usize = 11;

/// Encodes `n` as a base-62 string.
///
/// Zero encodes to `"0"`; no other output has a leading zero symbol.
///
/// # Examples
///
/// ```
/// use burrow_core::base62;
///
/// assert_eq!(base62::encode(0), "0");
/// assert_eq!(base62::encode(61), "Z");
/// assert_eq!(base62::encode(62), "10");
/// ```
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return "0".to_owned();
    }

    let mut buf = [0u8; MAX_ENCODED_LEN];
    let mut start = MAX_ENCODED_LEN;
    while n > 0 {
        start -= 1;
        buf[start] = ALPHABET[(n % BASE) as usize];
        n /= BASE;
    }

    // Every byte comes from ALPHABET, so the slice is ASCII.
    buf[start..].iter().map(|&b| b as char).collect()
}

/// Decodes a base-62 string back into the number it encodes.
///
/// Fails on an empty string, on any symbol outside [`ALPHABET`], and on
/// values that do not fit in a `u64`. A malformed code never decodes to a
/// plausible-looking number.
pub fn decode(s: &str) -> Result<u64, DecodeError> {
    if s.is_empty() {
        return Err(DecodeError::Empty);
    }

    s.chars().enumerate().try_fold(0u64, |acc, (position, character)| {
        let value = digit_value(character).ok_or(DecodeError::InvalidCharacter {
            character,
            position,
        })?;
        acc.checked_mul(BASE)
            .and_then(|acc| acc.checked_add(value))
            .ok_or(DecodeError::Overflow)
    })
}

/// Returns `true` if `s` is non-empty and made only of base-62 symbols.
pub fn is_valid_code(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| digit_value(c).is_some())
}

fn digit_value(c: char) -> Option<u64> {
    let value = match c {
        '0'..='9' => c as u64 - '0' as u64,
        'a'..='z' => c as u64 - 'a' as u64 + 10,
        'A'..='Z' => c as u64 - 'A' as u64 + 36,
        _ => return None,
    };
    Some(value)
}
