#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board size as `(nrows, ncols)`.
    pub size: Coord2,
    /// Threshold each cell's random draw is compared against, see [`LitPolicy`].
    pub chance_light_starts_on: f64,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, chance_light_starts_on: f64) -> Self {
        Self {
            size,
            chance_light_starts_on,
        }
    }

    /// Rejects empty boards and chances outside `[0, 1]` instead of clamping them.
    pub fn new(size: Coord2, chance_light_starts_on: f64) -> Result<Self> {
        let config = Self::new_unchecked(size, chance_light_starts_on);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_size(self.size)?;
        if !(0.0..=1.0).contains(&self.chance_light_starts_on) {
            return Err(GameError::InvalidChance);
        }
        Ok(())
    }

    pub const fn nrows(&self) -> Coord {
        self.size.0
    }

    pub const fn ncols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

fn validate_size((nrows, ncols): Coord2) -> Result<()> {
    if nrows == 0 || ncols == 0 {
        Err(GameError::InvalidSize)
    } else {
        Ok(())
    }
}

/// The board: one lit flag per cell, indexed `(y, x)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct LightGrid {
    lights: Array2<bool>,
}

impl LightGrid {
    pub fn unlit(size: Coord2) -> Result<Self> {
        validate_size(size)?;
        Ok(Self {
            lights: Array2::default(size.to_nd_index()),
        })
    }

    pub fn from_light_mask(lights: Array2<bool>) -> Result<Self> {
        let (nrows, ncols) = lights.dim();
        let max = usize::from(Coord::MAX);
        if nrows == 0 || ncols == 0 || nrows > max || ncols > max {
            return Err(GameError::InvalidSize);
        }
        Ok(Self { lights })
    }

    /// Builds a grid from row slices, e.g. `[[false, false], [true, false]]`.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let ncols = rows.first().map_or(0, |row| row.as_ref().len());
        if ncols == 0 || rows.iter().any(|row| row.as_ref().len() != ncols) {
            return Err(GameError::InvalidBoardShape);
        }

        let cells: Vec<bool> = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        let lights = Array2::from_shape_vec((rows.len(), ncols), cells)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Self::from_light_mask(lights)
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.lights.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    pub fn size(&self) -> Coord2 {
        let (nrows, ncols) = self.lights.dim();
        // bounded by `from_light_mask`
        (nrows as Coord, ncols as Coord)
    }

    pub fn nrows(&self) -> Coord {
        self.size().0
    }

    pub fn ncols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (nrows, ncols) = self.size();
        mult(nrows, ncols)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn lit_count(&self) -> CellCount {
        self.lights.iter().filter(|&&lit| lit).count() as CellCount
    }

    /// Every cell is off.
    pub fn has_won(&self) -> bool {
        self.lights.iter().all(|&lit| !lit)
    }

    /// Returns a copy with `coords` and its in-bounds orthogonal neighbors toggled.
    ///
    /// `self` is left untouched.
    pub fn flipped_around(&self, coords: Coord2) -> Result<Self> {
        let coords = self.validate_coords(coords)?;
        let mut next = self.clone();
        next.toggle(coords);
        for neighbor in orthogonal_neighbors(coords, self.size()) {
            next.toggle(neighbor);
        }
        Ok(next)
    }

    fn toggle(&mut self, coords: Coord2) {
        let cell = &mut self.lights[coords.to_nd_index()];
        *cell = !*cell;
    }
}

impl TryFrom<Array2<bool>> for LightGrid {
    type Error = GameError;

    fn try_from(lights: Array2<bool>) -> Result<Self> {
        Self::from_light_mask(lights)
    }
}

impl From<LightGrid> for Array2<bool> {
    fn from(grid: LightGrid) -> Self {
        grid.lights
    }
}

impl Index<Coord2> for LightGrid {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.lights[coords.to_nd_index()]
    }
}

/// Every flip changes at least the center cell, so both outcomes need a redraw.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlipOutcome {
    Flipped,
    Won,
}
