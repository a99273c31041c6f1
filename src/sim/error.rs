use core::fmt;

/// Failures of the flood engine and grid construction.
///
/// These are caller contract violations, not gameplay outcomes: a move that
/// floods nothing or a board that is already covered is a normal result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FloodError {
    /// Coordinate outside an N×N grid
    InvalidCoordinate { row: usize, col: usize, size: usize },
    /// Grid that cannot be flooded (zero dimension, bad palette, bad cells)
    InvalidGrid { reason: GridDefect },
    /// Flooded set built for a grid of a different dimension
    DimensionMismatch { grid: usize, set: usize },
    /// Flooded set whose bitmap and member list disagree
    InvalidRegion { reason: RegionDefect },
}

/// What is wrong with a rejected grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridDefect {
    ZeroDimension,
    PaletteTooSmall { palette_size: u8 },
    NotSquare { rows: usize, row: usize, len: usize },
    ColorOutOfPalette { index: usize, color: u8, palette_size: u8 },
    CellCount { expected: usize, actual: usize },
}

/// What is wrong with a rejected flooded set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionDefect {
    ZeroDimension,
    Empty,
    BitmapLength { expected: usize, actual: usize },
    MemberOutOfRange { index: usize },
    MembershipMismatch { index: usize },
    DuplicateMember { index: usize },
    MissingOrigin,
    ColorMismatch { index: usize },
}

impl fmt::Display for RegionDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "region dimension is zero"),
            Self::Empty => write!(f, "region has no members"),
            Self::BitmapLength { expected, actual } => {
                write!(f, "membership bitmap has {actual} entries, expected {expected}")
            }
            Self::MemberOutOfRange { index } => write!(f, "member {index} is off the board"),
            Self::MembershipMismatch { index } => {
                write!(f, "cell {index} disagrees between bitmap and member list")
            }
            Self::DuplicateMember { index } => write!(f, "member {index} listed twice"),
            Self::MissingOrigin => write!(f, "region does not contain the origin"),
            Self::ColorMismatch { index } => {
                write!(f, "member {index} does not share the origin's color")
            }
        }
    }
}

impl fmt::Display for GridDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "grid dimension is zero"),
            Self::PaletteTooSmall { palette_size } => {
                write!(f, "palette needs at least 2 colors, got {palette_size}")
            }
            Self::NotSquare { rows, row, len } => write!(
                f,
                "row {row} has {len} cells, expected {rows} for a square grid"
            ),
            Self::ColorOutOfPalette {
                index,
                color,
                palette_size,
            } => write!(
                f,
                "cell {index} has color {color}, palette holds {palette_size}"
            ),
            Self::CellCount { expected, actual } => {
                write!(f, "grid holds {actual} cells, expected {expected}")
            }
        }
    }
}

impl fmt::Display for FloodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { row, col, size } => {
                write!(f, "coordinate ({row}, {col}) outside {size}x{size} grid")
            }
            Self::InvalidGrid { reason } => write!(f, "invalid grid: {reason}"),
            Self::DimensionMismatch { grid, set } => write!(
                f,
                "flooded set is for a {set}x{set} grid, grid is {grid}x{grid}"
            ),
            Self::InvalidRegion { reason } => write!(f, "invalid flooded set: {reason}"),
        }
    }
}

impl std::error::Error for FloodError {}

impl From<GridDefect> for FloodError {
    fn from(reason: GridDefect) -> Self {
        Self::InvalidGrid { reason }
    }
}

impl From<RegionDefect> for FloodError {
    fn from(reason: RegionDefect) -> Self {
        Self::InvalidRegion { reason }
    }
}
