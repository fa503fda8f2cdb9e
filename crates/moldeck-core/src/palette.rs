//! The shaded swatch palette shown by the picker popup.
//!
//! Thirteen saturated base hues (plus pure white) are run through ten
//! shading passes, lightest first, giving the 13-wide, 10-tall grid the
//! picker displays. The grid never changes, so it is built once and cached
//! for the process.

use std::sync::LazyLock;

use crate::color::Rgb;

/// Swatch columns: one per base color, white last.
pub const GRID_COLUMNS: usize = 13;
/// Swatch rows: one per shading pass.
pub const GRID_ROWS: usize = 10;

const WHITE: Rgb = Rgb::new(255, 255, 255);

/// Saturated base colors spanning the hue wheel, plus pure white.
const BASE_COLORS: [Rgb; GRID_COLUMNS] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 128, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(128, 255, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 255, 128),
    Rgb::new(0, 255, 255),
    Rgb::new(0, 128, 255),
    Rgb::new(0, 0, 255),
    Rgb::new(128, 0, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(255, 0, 128),
    WHITE,
];

/// Shade factors per row, in percent. White has no channel headroom above
/// 255 and gets its own darkening ramp (second element of each pair).
const SHADE_FACTORS: [(u8, u8); GRID_ROWS] = [
    (190, 100),
    (175, 95),
    (150, 90),
    (135, 80),
    (100, 68),
    (85, 55),
    (70, 40),
    (60, 30),
    (50, 20),
    (35, 0),
];

/// Shade one channel by factor `f`.
///
/// For `f < 1` the scaled term darkens the channel. For `f > 1` the second
/// term lifts the channels the base color is missing, tinting it toward
/// white; below 1 that term is negative and never wins the max.
fn shade_channel(base: u8, f: f64) -> u8 {
    let scaled = (f64::from(base) * f).round();
    let lifted = (f64::from(255 - base) * (f - 1.0)).round();
    scaled.max(lifted).clamp(0.0, 255.0) as u8
}

fn shade(base: Rgb, f: f64) -> Rgb {
    Rgb::new(
        shade_channel(base.r, f),
        shade_channel(base.g, f),
        shade_channel(base.b, f),
    )
}

/// The fixed swatch grid, row-major, lightest row first.
#[derive(Debug)]
pub struct Palette {
    entries: Vec<Rgb>,
}

impl Palette {
    fn build() -> Self {
        let mut entries = Vec::with_capacity(GRID_ROWS * GRID_COLUMNS);
        for &(color_pct, white_pct) in &SHADE_FACTORS {
            for &base in &BASE_COLORS {
                let pct = if base == WHITE { white_pct } else { color_pct };
                entries.push(shade(base, f64::from(pct) / 100.0));
            }
        }
        Self { entries }
    }

    pub const fn rows(&self) -> usize {
        GRID_ROWS
    }

    pub const fn columns(&self) -> usize {
        GRID_COLUMNS
    }

    /// Swatch at `(row, col)`; row 0 is the lightest shading pass.
    pub fn at(&self, row: usize, col: usize) -> Rgb {
        self.entries[row * GRID_COLUMNS + col]
    }

    /// All swatches in row-major order.
    pub fn entries(&self) -> &[Rgb] {
        &self.entries
    }
}

static PALETTE: LazyLock<Palette> = LazyLock::new(Palette::build);

/// The process-wide palette instance.
pub fn palette() -> &'static Palette {
    &PALETTE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions() {
        let p = palette();
        assert_eq!(p.entries().len(), 130);
        assert_eq!(p.rows() * p.columns(), p.entries().len());
    }

    #[test]
    fn test_unity_row_keeps_base_colors() {
        // Row 4 has factor 100% for the colored columns.
        let p = palette();
        for (col, &base) in BASE_COLORS.iter().enumerate().take(GRID_COLUMNS - 1) {
            assert_eq!(p.at(4, col), base);
        }
        // White uses its own 68% factor on the same row.
        assert_eq!(p.at(4, 12), Rgb::new(173, 173, 173));
    }

    #[test]
    fn test_shading_spot_values() {
        let p = palette();
        // Lightest row tints red toward white.
        assert_eq!(p.at(0, 0), Rgb::new(255, 230, 230));
        // Orange at 150%: full red, scaled green, lifted blue.
        assert_eq!(p.at(2, 1), Rgb::new(255, 192, 128));
        // Darkest row: red drops to 35%, negative lift is ignored.
        assert_eq!(p.at(9, 0), Rgb::new(89, 0, 0));
        // The white ramp bottoms out at black.
        assert_eq!(p.at(9, 12), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_white_column_uses_its_own_ramp() {
        let p = palette();
        for row in 0..GRID_ROWS {
            let white = p.at(row, 12);
            assert!(
                (0..GRID_COLUMNS - 1).any(|col| p.at(row, col) != white),
                "row {row}: white column matches every colored column"
            );
        }
    }

    #[test]
    fn test_stable_across_calls() {
        assert_eq!(palette().at(3, 7), palette().at(3, 7));
        assert_eq!(palette().entries().as_ptr(), palette().entries().as_ptr());
    }
}
