#![warn(missing_docs)]

use crate::astar::MovementPolicy;
use crate::error::NavigationError;
use super::GridPoint;

/// Directions in neighbor order: up, left, right, down.
const ORTHOGONAL_STEPS: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
/// Diagonal directions, tried after the orthogonal ones.
const DIAGONAL_STEPS: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Walkability of a single grid cell.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Wall, never entered
    Blocked = 0,
    /// Floor, free to traverse
    Walkable = 1,
}

impl Cell {
    /// Converts the Cell to its matrix value
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Creates a Cell from a matrix value, `None` for anything but 0 or 1
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Blocked),
            1 => Some(Cell::Walkable),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Blocked => write!(f, "Blocked"),
            Cell::Walkable => write!(f, "Walkable"),
        }
    }
}

/// A binary walkability grid, stored row-major.
///
/// The grid is immutable once built. To change the map, build a new grid.
///
/// With the `serde` feature the grid (de)serializes as its matrix of rows, and
/// deserialization goes through [`WalkabilityGrid::from_matrix`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")
)]
pub struct WalkabilityGrid {
    /// Width of the grid in cells
    width: usize,
    /// Height of the grid in cells
    height: usize,
    /// Cell values, `y * width + x`
    data: Vec<Cell>,
}

impl WalkabilityGrid {
    /// Creates a grid from rows of matrix values.
    ///
    /// # Arguments
    /// * `rows` - One slice per row, top to bottom. `0` is blocked, `1` is walkable.
    ///
    /// # Returns
    /// * `Result<Self, NavigationError>` - The grid, or an error if the matrix is empty,
    ///   ragged, or holds any other value
    pub fn from_matrix<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, NavigationError> {
        let height = rows.len();
        if height == 0 {
            return Err(NavigationError::InvalidDimensions("Matrix must have at least one row"));
        }
        let width = rows[0].as_ref().len();
        if width == 0 {
            return Err(NavigationError::InvalidDimensions("Matrix rows must be non-empty"));
        }

        let mut data = Vec::with_capacity(width * height);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(NavigationError::InvalidDimensions("Matrix rows must all have the same length"));
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = Cell::from_u8(value)
                    .ok_or(NavigationError::InvalidCellValue { row, col, value })?;
                data.push(cell);
            }
        }

        Ok(WalkabilityGrid { width, height, data })
    }

    /// Width of the grid in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the grid in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Calculates the index in the data vector for an in-bounds grid point
    fn get_index(&self, p: GridPoint) -> usize {
        p.y as usize * self.width + p.x as usize
    }

    /// Returns `true` if the point lies inside the grid.
    pub fn contains(&self, p: GridPoint) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Gets the cell at a grid coordinate position.
    ///
    /// # Returns
    /// * `Result<Cell, NavigationError>` - The cell or an error if out of bounds
    pub fn get(&self, p: GridPoint) -> Result<Cell, NavigationError> {
        if self.contains(p) {
            Ok(self.data[self.get_index(p)])
        } else {
            Err(NavigationError::OutOfBounds("Grid index out of bounds"))
        }
    }

    /// Returns `true` if the point is inside the grid and not a wall.
    pub fn is_walkable(&self, p: GridPoint) -> bool {
        matches!(self.get(p), Ok(Cell::Walkable))
    }

    /// Walkable cells one step away from `p`, in a fixed order.
    ///
    /// With [`MovementPolicy::Diagonal`] the diagonal steps are always
    /// allowed, even between two blocked orthogonal cells.
    pub fn walkable_neighbors(&self, p: GridPoint, policy: MovementPolicy) -> Vec<GridPoint> {
        let diagonals: &[(i32, i32)] = match policy {
            MovementPolicy::Orthogonal => &[],
            MovementPolicy::Diagonal => &DIAGONAL_STEPS,
        };
        ORTHOGONAL_STEPS
            .iter()
            .chain(diagonals)
            .map(|&(dx, dy)| p.offset(dx, dy))
            .filter(|&n| self.is_walkable(n))
            .collect()
    }

    /// Iterates over every walkable cell, row by row.
    pub fn walkable_cells(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.cells_of(Cell::Walkable)
    }

    /// Iterates over every blocked cell, row by row.
    pub fn blocked_cells(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.cells_of(Cell::Blocked)
    }

    /// The grid as rows of matrix values, the inverse of [`WalkabilityGrid::from_matrix`].
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.data
            .chunks(self.width)
            .map(|row| row.iter().map(Cell::as_u8).collect())
            .collect()
    }

    fn cells_of(&self, kind: Cell) -> impl Iterator<Item = GridPoint> + '_ {
        self.data.iter().enumerate().filter_map(move |(i, &cell)| {
            (cell == kind).then(|| GridPoint::new((i % self.width) as i32, (i / self.width) as i32))
        })
    }
}

impl TryFrom<Vec<Vec<u8>>> for WalkabilityGrid {
    type Error = NavigationError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        WalkabilityGrid::from_matrix(&rows)
    }
}

impl From<WalkabilityGrid> for Vec<Vec<u8>> {
    fn from(grid: WalkabilityGrid) -> Self {
        grid.to_matrix()
    }
}

impl std::fmt::Display for WalkabilityGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "WalkabilityGrid ({}x{})", self.width, self.height)?;
        for row in self.data.chunks(self.width) {
            for cell in row {
                write!(f, "{} ", cell.as_u8())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> WalkabilityGrid {
        WalkabilityGrid::from_matrix(&[[1u8, 1, 1], [1, 0, 1], [1, 1, 1]]).unwrap()
    }

    #[test]
    fn test_grid_creation() {
        let grid = WalkabilityGrid::from_matrix(&[vec![1u8, 0, 1, 1], vec![1, 1, 1, 0]]).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(GridPoint::new(1, 0)).unwrap(), Cell::Blocked);
        assert_eq!(grid.get(GridPoint::new(1, 1)).unwrap(), Cell::Walkable);
        assert_eq!(grid.get(GridPoint::new(3, 1)).unwrap(), Cell::Blocked);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let result = WalkabilityGrid::from_matrix(&[[1u8, 1], [1, 2]]);
        assert_eq!(result, Err(NavigationError::InvalidCellValue { row: 1, col: 1, value: 2 }));
    }

    #[test]
    fn test_invalid_dimensions() {
        let empty: [[u8; 0]; 0] = [];
        assert!(matches!(
            WalkabilityGrid::from_matrix(&empty),
            Err(NavigationError::InvalidDimensions(_))
        ));
        assert!(matches!(
            WalkabilityGrid::from_matrix(&[Vec::<u8>::new()]),
            Err(NavigationError::InvalidDimensions(_))
        ));
        assert!(matches!(
            WalkabilityGrid::from_matrix(&[vec![1u8, 1], vec![1]]),
            Err(NavigationError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_bounds() {
        let grid = ring();
        assert!(grid.contains(GridPoint::new(2, 2)));
        assert!(!grid.contains(GridPoint::new(3, 0)));
        assert!(!grid.contains(GridPoint::new(0, -1)));
        assert!(matches!(grid.get(GridPoint::new(-1, 0)), Err(NavigationError::OutOfBounds(_))));
        assert!(!grid.is_walkable(GridPoint::new(1, 1)));
        assert!(!grid.is_walkable(GridPoint::new(5, 5)));
        assert!(grid.is_walkable(GridPoint::new(0, 2)));
    }

    #[test]
    fn test_neighbors() {
        let grid = ring();
        let corner = GridPoint::new(0, 0);
        assert_eq!(
            grid.walkable_neighbors(corner, MovementPolicy::Orthogonal),
            vec![GridPoint::new(1, 0), GridPoint::new(0, 1)]
        );
        // The only diagonal neighbor of the corner is the wall.
        assert_eq!(grid.walkable_neighbors(corner, MovementPolicy::Diagonal).len(), 2);

        let edge = GridPoint::new(1, 0);
        let diagonal = grid.walkable_neighbors(edge, MovementPolicy::Diagonal);
        assert_eq!(diagonal, vec![GridPoint::new(0, 0), GridPoint::new(2, 0), GridPoint::new(0, 1), GridPoint::new(2, 1)]);
    }

    #[test]
    fn test_walkable_cells() {
        let grid = ring();
        let cells: Vec<GridPoint> = grid.walkable_cells().collect();
        assert_eq!(cells.len(), 8);
        assert!(!cells.contains(&GridPoint::new(1, 1)));
        assert_eq!(cells[3], GridPoint::new(0, 1));
        assert_eq!(grid.blocked_cells().collect::<Vec<_>>(), vec![GridPoint::new(1, 1)]);
    }

    #[test]
    fn test_display() {
        let display_str = format!("{}", ring());
        assert!(display_str.contains("WalkabilityGrid (3x3)"));
        assert!(display_str.contains("1 0 1"));
    }

    #[test]
    fn test_matrix_conversions_validate() {
        let grid = ring();
        assert_eq!(grid.to_matrix(), vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]);
        assert_eq!(WalkabilityGrid::try_from(grid.to_matrix()), Ok(grid.clone()));
        assert_eq!(Vec::<Vec<u8>>::from(grid), vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]);

        assert!(matches!(
            WalkabilityGrid::try_from(Vec::<Vec<u8>>::new()),
            Err(NavigationError::InvalidDimensions(_))
        ));
        assert!(matches!(
            WalkabilityGrid::try_from(vec![Vec::<u8>::new(), Vec::new()]),
            Err(NavigationError::InvalidDimensions(_))
        ));
        assert!(matches!(
            WalkabilityGrid::try_from(vec![vec![1u8, 1], vec![1]]),
            Err(NavigationError::InvalidDimensions(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_goes_through_validation() {
        let json = serde_json::to_string(&ring()).unwrap();
        assert_eq!(json, "[[1,1,1],[1,0,1],[1,1,1]]");
        assert_eq!(serde_json::from_str::<WalkabilityGrid>(&json).unwrap(), ring());

        assert!(serde_json::from_str::<WalkabilityGrid>("[]").is_err());
        assert!(serde_json::from_str::<WalkabilityGrid>("[[1,1],[1]]").is_err());
        assert!(serde_json::from_str::<WalkabilityGrid>("[[1,2]]").is_err());
        assert!(serde_json::from_str::<WalkabilityGrid>(r#"{"width":0,"height":1,"data":[]}"#).is_err());
    }
}
