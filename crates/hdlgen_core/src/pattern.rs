//! Bit-pattern string formatting shared by the generators.

/// Formats `value` in binary, zero-padded to `width` characters.
pub fn binary(value: u32, width: u32) -> String {
    format!("{value:0width$b}", width = width as usize)
}

/// Formats a one-hot pattern of `width` characters with the `'1'` at
/// offset `index` from the left (MSB side).
///
/// The orientation matches the case-label ordering of the decoder and
/// encoder templates: selector value 0 drives the leftmost bit.
pub fn one_hot(index: u32, width: u32) -> String {
    let mut s = String::with_capacity(width as usize);
    for pos in 0..width {
        s.push(if pos == index { '1' } else { '0' });
    }
    s
}
