use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// A bounded rectangular field of cells. Row-major, fixed size for its
/// whole lifetime, not toroidal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    pub fn set_alive(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        let i = self.index(x, y)?;
        self.cells[i] = true;
        Ok(())
    }

    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool, GridError> {
        Ok(self.cells[self.index(x, y)?])
    }

    pub fn count_live_neighbours(&self, x: usize, y: usize) -> Result<usize, GridError> {
        self.index(x, y)?;
        Ok(self.live_neighbours(x, y))
    }

    // Offsets that leave the grid are skipped, so edges and corners see
    // fewer than 8 candidates.
    fn live_neighbours(&self, x: usize, y: usize) -> usize {
        neighbours((x as isize, y as isize))
            .filter(|&(nx, ny)| {
                (0..self.width as isize).contains(&nx) && (0..self.height as isize).contains(&ny)
            })
            .filter(|&(nx, ny)| self.cells[ny as usize * self.width + nx as usize])
            .count()
    }

    /// Advances the grid by one generation. Every count is taken against the
    /// pre-tick cells; the new buffer replaces the old one whole, so no
    /// reader ever sees a half-updated generation.
    pub fn tick(&mut self) {
        let next = (0..self.height)
            .cartesian_product(0..self.width)
            .map(|(y, x)| {
                let alive = self.cells[y * self.width + x];
                let count = self.live_neighbours(x, y);
                matches!((count, alive), (2..=3, true) | (3, false))
            })
            .collect();
        self.cells = next;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }
}

fn neighbours((x, y): (isize, isize)) -> impl Iterator<Item = (isize, isize)> {
    (-1..=1)
        .cartesian_product(-1..=1)
        .filter(|&d| d != (0, 0))
        .map(move |(dx, dy)| (x + dx, y + dy))
}

impl FromStr for Grid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.trim_matches('\n').lines().collect();
        let width = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let mut grid = Grid::new(width, lines.len()).map_err(|e| e.to_string())?;
        for (y, line) in lines.iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                match c {
                    ' ' => (),
                    'o' => grid.set_alive(x, y).map_err(|e| e.to_string())?,
                    _ => return Err(format!("Unexpected character {c}")),
                }
            }
        }
        Ok(grid)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { "O " } else { "  " })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
