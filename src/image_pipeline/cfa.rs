//! Bayer color filter array description

use std::fmt;
use std::str::FromStr;

use crate::image_pipeline::common::error::{DemosaicError, Result};

/// Color channel of a filter cell, also the component index in an RGB triplet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.write_str("R"),
            Self::Green => f.write_str("G"),
            Self::Blue => f.write_str("B"),
        }
    }
}

use Channel::*;

/// A 2x2 Bayer tile, addressed as `[y][x]`.
///
/// Always holds exactly one red, one blue and two green cells; the only way to
/// build one is through a constructor that checks this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CfaPattern {
    cells: [[Channel; 2]; 2],
}

impl CfaPattern {
    /// Validates the one-red/two-green/one-blue constraint.
    pub fn new(cells: [[Channel; 2]; 2]) -> Result<Self> {
        let mut counts = [0usize; 3];
        for channel in cells.iter().flatten() {
            counts[channel.index()] += 1;
        }
        if counts != [1, 2, 1] {
            return Err(DemosaicError::InvalidPattern {
                red: counts[Red.index()],
                green: counts[Green.index()],
                blue: counts[Blue.index()],
            });
        }
        Ok(Self { cells })
    }

    pub const fn rggb() -> Self {
        Self { cells: [[Red, Green], [Green, Blue]] }
    }

    pub const fn bggr() -> Self {
        Self { cells: [[Blue, Green], [Green, Red]] }
    }

    pub const fn grbg() -> Self {
        Self { cells: [[Green, Red], [Blue, Green]] }
    }

    pub const fn gbrg() -> Self {
        Self { cells: [[Green, Blue], [Red, Green]] }
    }

    /// Filter color over the sensor cell at `(x, y)`. Periodic with period 2 on both axes.
    #[inline]
    pub fn channel_at(&self, x: usize, y: usize) -> Channel {
        self.cells[y % 2][x % 2]
    }

    /// Pattern seen by a crop whose origin sits at `(dx, dy)` of this sensor.
    ///
    /// `shifted(dx, dy).channel_at(x, y) == channel_at(x + dx, y + dy)`
    pub fn shifted(&self, dx: usize, dy: usize) -> Self {
        let mut cells = self.cells;
        for (y, row) in cells.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = self.channel_at(x + dx % 2, y + dy % 2);
            }
        }
        Self { cells }
    }

    pub fn cells(&self) -> [[Channel; 2]; 2] {
        self.cells
    }
}

impl Default for CfaPattern {
    fn default() -> Self {
        Self::rggb()
    }
}

impl fmt::Display for CfaPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for channel in self.cells.iter().flatten() {
            write!(f, "{channel}")?;
        }
        Ok(())
    }
}

impl FromStr for CfaPattern {
    type Err = DemosaicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "RGGB" => Ok(Self::rggb()),
            "BGGR" => Ok(Self::bggr()),
            "GRBG" => Ok(Self::grbg()),
            "GBRG" => Ok(Self::gbrg()),
            _ => Err(DemosaicError::UnknownPattern(s.to_string())),
        }
    }
}
