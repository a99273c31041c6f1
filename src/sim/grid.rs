//! Square board of palette color indices
//!
//! Cells are stored row-major; a coordinate packs to `row * size + col`.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::{FloodError, GridDefect};
use crate::consts::MIN_PALETTE_SIZE;
use crate::palette::PaletteColor;

/// Palette index of a tile
pub type Color = u8;

/// A (row, col) position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Top-left corner, where every flood starts
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    palette_size: u8,
    cells: Vec<Color>,
}

/// Serialized board shape, checked before it becomes a `Grid`
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    palette_size: u8,
    cells: Vec<Color>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = FloodError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Self::check_shape(raw.size, raw.palette_size)?;
        let expected = raw.size.checked_mul(raw.size).unwrap_or(usize::MAX);
        if raw.cells.len() != expected {
            return Err(GridDefect::CellCount {
                expected,
                actual: raw.cells.len(),
            }
            .into());
        }
        for (index, &color) in raw.cells.iter().enumerate() {
            Self::check_color(index, color, raw.palette_size)?;
        }
        Ok(Self {
            size: raw.size,
            palette_size: raw.palette_size,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Board with every cell set to `color`
    pub fn filled(size: usize, palette_size: u8, color: Color) -> Result<Self, FloodError> {
        Self::check_shape(size, palette_size)?;
        Self::check_color(0, color, palette_size)?;
        Ok(Self {
            size,
            palette_size,
            cells: vec![color; size * size],
        })
    }

    /// Board from explicit rows (row-major, must be square)
    pub fn from_rows<R: AsRef<[Color]>>(palette_size: u8, rows: &[R]) -> Result<Self, FloodError> {
        let size = rows.len();
        Self::check_shape(size, palette_size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.len() != size {
                return Err(GridDefect::NotSquare {
                    rows: size,
                    row,
                    len: line.len(),
                }
                .into());
            }
            for &color in line {
                Self::check_color(cells.len(), color, palette_size)?;
                cells.push(color);
            }
        }

        Ok(Self {
            size,
            palette_size,
            cells,
        })
    }

    /// Board with an independent uniform color per cell
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        palette_size: u8,
        rng: &mut R,
    ) -> Result<Self, FloodError> {
        Self::check_shape(size, palette_size)?;
        let cells = (0..size * size)
            .map(|_| rng.random_range(0..palette_size))
            .collect();
        Ok(Self {
            size,
            palette_size,
            cells,
        })
    }

    fn check_shape(size: usize, palette_size: u8) -> Result<(), GridDefect> {
        if size == 0 {
            return Err(GridDefect::ZeroDimension);
        }
        if palette_size < MIN_PALETTE_SIZE {
            return Err(GridDefect::PaletteTooSmall { palette_size });
        }
        Ok(())
    }

    fn check_color(index: usize, color: Color, palette_size: u8) -> Result<(), GridDefect> {
        if color >= palette_size {
            return Err(GridDefect::ColorOutOfPalette {
                index,
                color,
                palette_size,
            });
        }
        Ok(())
    }

    /// Edge length N
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn palette_size(&self) -> u8 {
        self.palette_size
    }

    /// N²
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Packed index of an in-bounds coordinate
    pub fn index_of(&self, coord: Coord) -> Result<usize, FloodError> {
        if !self.in_bounds(coord) {
            return Err(FloodError::InvalidCoordinate {
                row: coord.row,
                col: coord.col,
                size: self.size,
            });
        }
        Ok(coord.row * self.size + coord.col)
    }

    #[inline]
    pub fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index / self.size, index % self.size)
    }

    /// Color at a coordinate (None when out of bounds)
    pub fn get(&self, coord: Coord) -> Option<Color> {
        self.index_of(coord).ok().map(|i| self.cells[i])
    }

    /// Color at a packed index
    #[inline]
    pub fn color_at(&self, index: usize) -> Color {
        self.cells[index]
    }

    /// Recolor one cell
    pub fn set(&mut self, coord: Coord, color: Color) -> Result<(), FloodError> {
        let index = self.index_of(coord)?;
        Self::check_color(index, color, self.palette_size)?;
        self.cells[index] = color;
        Ok(())
    }

    /// Recolor every cell in `indices`.
    ///
    /// This is the caller-side half of a move: the flood engine expects the
    /// region to already carry the new color before it grows.
    pub fn paint<I>(&mut self, indices: I, color: Color) -> Result<(), FloodError>
    where
        I: IntoIterator<Item = usize>,
    {
        for index in indices {
            Self::check_color(index, color, self.palette_size)?;
            let size = self.size;
            let cell = self
                .cells
                .get_mut(index)
                .ok_or(FloodError::InvalidCoordinate {
                    row: index / size,
                    col: index % size,
                    size,
                })?;
            *cell = color;
        }
        Ok(())
    }

    /// Packed indices of the up/down/left/right neighbors that exist
    #[inline]
    pub fn neighbor_indices(&self, index: usize) -> impl Iterator<Item = usize> + use<> {
        let n = self.size;
        let (row, col) = (index / n, index % n);
        [
            (row > 0).then(|| index - n),
            (row + 1 < n).then(|| index + n),
            (col > 0).then(|| index - 1),
            (col + 1 < n).then(|| index + 1),
        ]
        .into_iter()
        .flatten()
    }

    /// In-bounds 4-neighbors of a coordinate
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        let index = self.index_of(coord).ok();
        index
            .into_iter()
            .flat_map(|i| self.neighbor_indices(i))
            .map(|i| self.coord_of(i))
    }

    /// Number of cells holding each color
    pub fn color_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.palette_size as usize];
        for &c in &self.cells {
            counts[c as usize] += 1;
        }
        counts
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for (i, &color) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                let symbol = PaletteColor::from_index(color)
                    .map(|c| c.symbol())
                    .unwrap_or('?');
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Grid::from_rows(2, &[vec![0, 1], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            FloodError::InvalidGrid {
                reason: GridDefect::NotSquare { rows: 2, row: 1, len: 1 }
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_empty_and_bad_palette() {
        let empty: [Vec<Color>; 0] = [];
        assert!(matches!(
            Grid::from_rows(2, &empty),
            Err(FloodError::InvalidGrid { reason: GridDefect::ZeroDimension })
        ));
        assert!(matches!(
            Grid::from_rows(1, &[vec![0]]),
            Err(FloodError::InvalidGrid { reason: GridDefect::PaletteTooSmall { .. } })
        ));
        assert!(matches!(
            Grid::from_rows(2, &[vec![0, 2], vec![1, 1]]),
            Err(FloodError::InvalidGrid {
                reason: GridDefect::ColorOutOfPalette { index: 1, color: 2, .. }
            })
        ));
    }

    #[test]
    fn test_neighbors_corner_edge_center() {
        let grid = Grid::filled(3, 2, 0).unwrap();
        assert_eq!(grid.neighbors(Coord::new(0, 0)).count(), 2);
        assert_eq!(grid.neighbors(Coord::new(0, 1)).count(), 3);
        assert_eq!(grid.neighbors(Coord::new(1, 1)).count(), 4);
        assert_eq!(grid.neighbors(Coord::new(3, 0)).count(), 0);

        let mut around: Vec<Coord> = grid.neighbors(Coord::new(1, 1)).collect();
        around.sort();
        assert_eq!(
            around,
            vec![
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 2),
                Coord::new(2, 1)
            ]
        );
    }

    #[test]
    fn test_single_cell_grid_has_no_neighbors() {
        let grid = Grid::filled(1, 2, 1).unwrap();
        assert_eq!(grid.neighbor_indices(0).count(), 0);
    }

    #[test]
    fn test_random_is_seeded() {
        let a = Grid::random(12, 6, &mut Pcg32::seed_from_u64(7)).unwrap();
        let b = Grid::random(12, 6, &mut Pcg32::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
        assert!(a.color_counts().iter().sum::<usize>() == 144);
        assert!((0..a.cell_count()).all(|i| a.color_at(i) < 6));
    }

    #[test]
    fn test_paint_and_set() {
        let mut grid = Grid::filled(2, 3, 0).unwrap();
        grid.paint([0, 3], 2).unwrap();
        assert_eq!(grid.get(Coord::new(0, 0)), Some(2));
        assert_eq!(grid.get(Coord::new(1, 1)), Some(2));
        assert_eq!(grid.get(Coord::new(0, 1)), Some(0));
        assert!(grid.paint([4], 1).is_err());
        assert!(grid.set(Coord::new(0, 1), 3).is_err());
        grid.set(Coord::new(0, 1), 1).unwrap();
        assert_eq!(grid.get(Coord::new(0, 1)), Some(1));
    }

    #[test]
    fn test_deserialize_validates_shape() {
        let parse = |json: &str| serde_json::from_str::<Grid>(json);

        let grid = parse(r#"{"size":2,"palette_size":3,"cells":[0,1,2,0]}"#).unwrap();
        assert_eq!(grid, Grid::from_rows(3, &[[0, 1], [2, 0]]).unwrap());

        for (json, defect) in [
            (
                r#"{"size":3,"palette_size":2,"cells":[0,0]}"#,
                "grid holds 2 cells, expected 9",
            ),
            (
                r#"{"size":0,"palette_size":2,"cells":[]}"#,
                "grid dimension is zero",
            ),
            (
                r#"{"size":1,"palette_size":1,"cells":[0]}"#,
                "palette needs at least 2 colors, got 1",
            ),
            (
                r#"{"size":1,"palette_size":2,"cells":[5]}"#,
                "cell 0 has color 5, palette holds 2",
            ),
        ] {
            let err = parse(json).unwrap_err().to_string();
            assert!(err.contains(defect), "{json}: {err}");
        }
    }

    #[test]
    fn test_serialized_grid_reloads() {
        let grid = Grid::random(5, 4, &mut Pcg32::seed_from_u64(3)).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(serde_json::from_str::<Grid>(&json).unwrap(), grid);
    }

    #[test]
    fn test_display_uses_palette_symbols() {
        let grid = Grid::from_rows(2, &[vec![0, 1], vec![1, 0]]).unwrap();
        assert_eq!(grid.to_string(), "R O\nO R\n");
    }
}
