use circle_gems::{DISPLAY_DECIMALS, Formula, calculate, format_sequence};
use std::io::Write;

/// Radii the program evaluates every formula for
pub const RADII: [f64; 4] = [3., 4., 5., 6.];

/// Writes one line per formula in [`Formula::ALL`] order with the rounded results over `radii`.
pub fn render(out: &mut impl Write, radii: &[f64]) -> std::io::Result<()> {
    for formula in Formula::ALL {
        let values = calculate(radii.iter().copied(), |r| formula.apply(r));
        log::debug!("{formula}: {values:?}");
        writeln!(out, "{}", format_sequence(&values, DISPLAY_DECIMALS))?;
    }
    Ok(())
}
