use crate::{Coordinate, Row, WALL_SIZE};
use std::collections::HashSet;

/// Owns one player's wall: a square grid of cells which are either empty or occupied by a
/// tile. The [color](crate::Color) of every cell is fixed by the
/// [wall pattern](crate::WALL_PATTERN), so only occupancy is stored.
///
/// Cells are only ever occupied through [Wall::occupy] and never become empty again.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Wall {
    /// Occupancy indexed by row then column.
    cells: [[bool; WALL_SIZE]; WALL_SIZE],
}

/// Describes the reasons why a [wall](Wall) could not be created or changed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum WallError {
    /// Attempting to occupy a cell that is already occupied.
    AlreadyOccupied(Coordinate),
    /// Attempting to create a wall from a grid without [WALL_SIZE] rows.
    MalformedRows(usize),
    /// Attempting to create a wall from a grid where some row does not have
    /// [WALL_SIZE] cells.
    MalformedRow {
        /// The index of the malformed row.
        row: usize,
        /// The number of cells in the malformed row.
        len: usize,
    },
}

impl Wall {
    /// # Returns
    ///
    /// A [wall](Wall) where every cell is empty.
    #[inline]
    pub fn new() -> Wall {
        Wall::default()
    }

    /// # Arguments
    ///
    /// * `cells`: Occupancy indexed by row then column.
    ///
    /// # Returns
    ///
    /// A [wall](Wall) with the given occupancy.
    #[inline]
    pub fn from_cells(cells: [[bool; WALL_SIZE]; WALL_SIZE]) -> Wall {
        Wall { cells }
    }

    /// # Returns
    ///
    /// Occupancy indexed by row then column.
    #[inline]
    pub fn cells(&self) -> &[[bool; WALL_SIZE]; WALL_SIZE] {
        &self.cells
    }

    /// # Returns
    ///
    /// Whether the cell at `coordinate` holds a tile.
    #[inline]
    pub fn is_occupied(&self, (row, column): Coordinate) -> bool {
        self.cells[row.index()][column.index()]
    }

    /// Places a tile on the empty cell at `coordinate`.
    ///
    /// # Errors
    ///
    /// * [`WallError::AlreadyOccupied`] Attempting to occupy a cell that is already
    /// occupied. The wall is left unchanged.
    ///
    /// # See Also
    ///
    /// * [PatternLine::flush](crate::PatternLine::flush)
    /// * [score_for_placement](crate::score_for_placement)
    pub fn occupy(&mut self, coordinate: Coordinate) -> Result<(), WallError> {
        let (row, column) = coordinate;
        let cell = &mut self.cells[row.index()][column.index()];
        if *cell {
            return Err(WallError::AlreadyOccupied(coordinate));
        }

        *cell = true;
        log::debug!("occupied wall cell {:?}", coordinate);
        Ok(())
    }

    /// # Returns
    ///
    /// The number of occupied cells.
    pub fn occupied_len(&self) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell).count()
    }

    /// # Returns
    ///
    /// Whether every cell in `row` is occupied.
    #[inline]
    pub fn is_row_complete(&self, row: Row) -> bool {
        self.cells[row.index()].iter().all(|&cell| cell)
    }

    /// The game ends after the round in which some player completes a row.
    ///
    /// # Returns
    ///
    /// Whether any row on the wall is complete.
    pub fn has_complete_row(&self) -> bool {
        Row::rows().into_iter().any(|row| self.is_row_complete(row))
    }
}

impl TryFrom<&[Vec<bool>]> for Wall {
    type Error = HashSet<WallError>;

    /// Checks that `rows` is a [WALL_SIZE] by [WALL_SIZE] grid and returns all found errors.
    /// Otherwise, copies the occupancy of `rows` into a new [wall](Wall).
    ///
    /// # Errors
    ///
    /// * [`WallError::MalformedRows`] Attempting to create a wall from a grid without
    /// [WALL_SIZE] rows.
    /// * [`WallError::MalformedRow`] Attempting to create a wall from a grid where some row
    /// does not have [WALL_SIZE] cells.
    fn try_from(rows: &[Vec<bool>]) -> Result<Wall, HashSet<WallError>> {
        let mut errors: HashSet<WallError> = rows
            .iter()
            .enumerate()
            .filter(|(_, cells)| cells.len() != WALL_SIZE)
            .map(|(row, cells)| WallError::MalformedRow {
                row,
                len: cells.len(),
            })
            .collect();
        if rows.len() != WALL_SIZE {
            errors.insert(WallError::MalformedRows(rows.len()));
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut wall = Wall::new();
        for (wall_row, cells) in wall.cells.iter_mut().zip(rows) {
            wall_row.copy_from_slice(cells);
        }
        Ok(wall)
    }
}
