//! Fixed-width binary rendering of unsigned values, for display of
//! operands, results and operation codes.

use super::error::ConversionFailed;

/// Renders `value` in binary, zero-padded on the left to exactly
/// `width` digits.
///
/// A value which needs more than `width` digits is rejected rather
/// than printed wider than requested.  A width of zero is only valid
/// for a value of zero, and yields an empty string.
pub fn format_binary(value: u64, width: u32) -> Result<String, ConversionFailed> {
    if width < u64::BITS && value >> width != 0 {
        return Err(ConversionFailed::TooLarge);
    }
    if width == 0 {
        return Ok(String::new());
    }
    let width = usize::try_from(width).map_err(|_| ConversionFailed::TooLarge)?;
    Ok(format!("{value:0width$b}"))
}
