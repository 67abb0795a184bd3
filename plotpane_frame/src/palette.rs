// Copyright 2026 the Plotpane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed display palette for curves.

use peniko::Color;

/// The ten fixed curve colors, assigned by registration index.
pub const CURVE_PALETTE: [Color; 10] = [
    Color::from_rgb8(31, 119, 180),
    Color::from_rgb8(255, 127, 14),
    Color::from_rgb8(44, 160, 44),
    Color::from_rgb8(214, 39, 40),
    Color::from_rgb8(148, 103, 189),
    Color::from_rgb8(140, 86, 75),
    Color::from_rgb8(227, 119, 194),
    Color::from_rgb8(127, 127, 127),
    Color::from_rgb8(188, 189, 34),
    Color::from_rgb8(23, 190, 207),
];

/// Returns the display color for the curve at `index`.
///
/// Indices wrap by modulo, so the palette cycles for more than ten curves.
#[must_use]
pub fn curve_color(index: usize) -> Color {
    CURVE_PALETTE[index % CURVE_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps_by_modulo() {
        assert_eq!(curve_color(0), CURVE_PALETTE[0]);
        assert_eq!(curve_color(10), CURVE_PALETTE[0]);
        assert_eq!(curve_color(23), CURVE_PALETTE[3]);
    }
}
