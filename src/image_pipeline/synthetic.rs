//! Deterministic sensor images for tests.

use crate::image_pipeline::cfa::{CfaPattern, Channel};
use crate::image_pipeline::raw::types::SensorImage;

/// Every cell set to `value`.
pub(crate) fn constant(width: usize, height: usize, value: u8) -> SensorImage {
    SensorImage {
        width,
        height,
        data: vec![value; width * height],
    }
}

/// Horizontal ramp `x`, with `boost` added (saturating) wherever `pattern`
/// puts a `tinted` filter. Gives a gradient with a visible color cast.
pub(crate) fn tinted_ramp(
    width: usize,
    height: usize,
    pattern: &CfaPattern,
    tinted: Channel,
    boost: u8,
) -> SensorImage {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let base = x.min(255) as u8;
            let value = if pattern.channel_at(x, y) == tinted {
                base.saturating_add(boost)
            } else {
                base
            };
            data.push(value);
        }
    }
    SensorImage { width, height, data }
}

/// Diagonal gradient `(x + y) / 2`, clamped to 255.
pub(crate) fn diagonal_gradient(width: usize, height: usize) -> SensorImage {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            data.push(((x + y) / 2).min(255) as u8);
        }
    }
    SensorImage { width, height, data }
}

/// Image from literal rows; all rows must have the same length.
pub(crate) fn from_rows(rows: &[&[u8]]) -> SensorImage {
    let width = rows.first().map_or(0, |row| row.len());
    assert!(rows.iter().all(|row| row.len() == width), "ragged rows");
    SensorImage {
        width,
        height: rows.len(),
        data: rows.concat(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tinted_ramp_boosts_only_tinted_cells() {
        let cfa = CfaPattern::rggb();
        let image = tinted_ramp(4, 2, &cfa, Channel::Red, 100);
        assert_eq!(image.row(0), &[100, 1, 102, 3]);
        assert_eq!(image.row(1), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_tinted_ramp_saturates() {
        let cfa = CfaPattern::rggb();
        let image = tinted_ramp(256, 1, &cfa, Channel::Red, 100);
        assert_eq!(image.sample(254, 0), 255);
        assert_eq!(image.sample(255, 0), 255);
    }

    #[test]
    fn test_from_rows() {
        let image = from_rows(&[&[1, 2], &[3, 4], &[5, 6]]);
        assert_eq!((image.width, image.height), (2, 3));
        assert_eq!(image.sample(1, 2), 6);
    }
}
