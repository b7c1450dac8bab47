/*!
    Luma reduction.
*/

/**
    Reduce one color pixel to a single luma byte.

    Uses the BT.601 weights `Y = 0.114 B + 0.587 G + 0.299 R`, rounded to
    the nearest integer with halves rounded up. Computed in thousandths so
    the result never depends on float rounding.
*/
#[inline]
pub fn luma(b: u8, g: u8, r: u8) -> u8 {
    let weighted = 114 * b as u32 + 587 * g as u32 + 299 * r as u32;
    ((weighted + 500) / 1000).min(255) as u8
}
