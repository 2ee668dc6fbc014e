use crate::{Coordinate, Wall, WALL_SIZE};

/// Describes the reason why [`score_for_placement`] could not be executed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ScoreError {
    /// Attempting to score a cell which has not been occupied yet.
    Unoccupied(Coordinate),
}

/// Counts the occupied cells in `coordinate`'s row which are connected to `coordinate`,
/// including the cell at `coordinate` itself. Each side stops at the first empty cell or the
/// edge of the wall.
///
/// # See Also
///
/// * [score_for_placement]
/// * [vertical_run]
pub fn horizontal_run(wall: &Wall, (row, column): Coordinate) -> usize {
    let cells = &wall.cells()[row.index()];
    let column = column.index();
    let left = (0..column).rev().take_while(|&left| cells[left]).count();
    let right = (column + 1..WALL_SIZE)
        .take_while(|&right| cells[right])
        .count();
    left + 1 + right
}

/// Counts the occupied cells in `coordinate`'s column which are connected to `coordinate`,
/// including the cell at `coordinate` itself. Each side stops at the first empty cell or the
/// edge of the wall.
///
/// # See Also
///
/// * [score_for_placement]
/// * [horizontal_run]
pub fn vertical_run(wall: &Wall, (row, column): Coordinate) -> usize {
    let cells = wall.cells();
    let (row, column) = (row.index(), column.index());
    let up = (0..row).rev().take_while(|&up| cells[up][column]).count();
    let down = (row + 1..WALL_SIZE)
        .take_while(|&down| cells[down][column])
        .count();
    up + 1 + down
}

/// Takes a `wall` on which the tile at `coordinate` has just been placed and returns the
/// points earned by that tile.
///
/// # Points Calculation
///
/// A tile with no occupied neighbor earns `1` point. Otherwise, the tile earns the length
/// of its [horizontal run](horizontal_run) if longer than `1`, plus the length of its
/// [vertical run](vertical_run) if longer than `1`. A tile joining both a row and a column
/// is counted twice.
///
/// Points depend on every other occupied cell, so the result is only meaningful for the
/// wall right after the tile is placed and before any other tile is.
///
/// # Errors
///
/// * [`ScoreError::Unoccupied`] Attempting to score a cell which has not been occupied yet.
///
/// # See Also
///
/// * [Wall::occupy]
/// * [PatternLine::flush](crate::PatternLine::flush)
///
/// # Returns
///
/// The points earned by the tile at `coordinate`.
pub fn score_for_placement(wall: &Wall, coordinate: Coordinate) -> Result<usize, ScoreError> {
    if !wall.is_occupied(coordinate) {
        return Err(ScoreError::Unoccupied(coordinate));
    }

    let horizontal = horizontal_run(wall, coordinate);
    let vertical = vertical_run(wall, coordinate);
    let points = match (horizontal, vertical) {
        (1, 1) => 1,
        (horizontal, vertical) => {
            let horizontal = if horizontal > 1 { horizontal } else { 0 };
            let vertical = if vertical > 1 { vertical } else { 0 };
            horizontal + vertical
        }
    };

    log::trace!(
        "scored {} points at {:?} from runs {}x{}",
        points,
        coordinate,
        horizontal,
        vertical
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{coordinate, random_coordinate, Column, Row};

    #[test]
    fn isolated_tile_anywhere() {
        for row in Row::rows() {
            for column in Column::columns() {
                test_score_for_placement(&[], (row.index(), column.index()), 1);
            }
        }
    }

    #[test]
    fn unoccupied_cell() {
        let mut wall = Wall::new();
        let coordinate = random_coordinate(&mut rand::thread_rng());
        for neighbor in Row::rows() {
            if neighbor != coordinate.0 {
                wall.occupy((neighbor, coordinate.1)).unwrap();
            }
        }

        let actual_error = score_for_placement(&wall, coordinate).unwrap_err();

        assert_eq!(ScoreError::Unoccupied(coordinate), actual_error);
    }

    #[test]
    fn horizontal_run_of_three() {
        test_score_for_placement(&[(2, 1), (2, 2)], (2, 3), 3);
    }

    #[test]
    fn horizontal_run_placed_in_middle() {
        test_score_for_placement(&[(0, 0), (0, 2)], (0, 1), 3);
    }

    #[test]
    fn vertical_run_of_three() {
        test_score_for_placement(&[(0, 4), (1, 4)], (2, 4), 3);
    }

    #[test]
    fn horizontal_and_vertical_runs_of_two() {
        test_score_for_placement(&[(1, 2), (2, 1)], (2, 2), 4);
    }

    #[test]
    fn corner_joins_row_and_column() {
        test_score_for_placement(&[(0, 1), (0, 2), (1, 0), (2, 0), (3, 0)], (0, 0), 3 + 4);
    }

    #[test]
    fn gap_stops_run() {
        test_score_for_placement(&[(3, 0), (3, 1), (3, 4)], (3, 3), 2);
    }

    #[test]
    fn diagonal_neighbors_do_not_count() {
        test_score_for_placement(&[(1, 1), (1, 3), (3, 1), (3, 3)], (2, 2), 1);
    }

    #[test]
    fn last_cell_on_full_wall() {
        let occupied: Vec<(usize, usize)> = (0..WALL_SIZE)
            .flat_map(|row| (0..WALL_SIZE).map(move |column| (row, column)))
            .filter(|&cell| cell != (2, 2))
            .collect();

        test_score_for_placement(&occupied, (2, 2), 2 * WALL_SIZE);
    }

    #[test]
    fn runs_include_placed_cell() {
        let mut wall = Wall::new();
        let placed = coordinate(4, 4).unwrap();
        wall.occupy(placed).unwrap();
        wall.occupy(coordinate(4, 3).unwrap()).unwrap();

        assert_eq!(2, horizontal_run(&wall, placed));
        assert_eq!(1, vertical_run(&wall, placed));
    }

    fn test_score_for_placement(
        occupied: &[(usize, usize)],
        (row, column): (usize, usize),
        expected_points: usize,
    ) {
        let mut wall = Wall::new();
        for &(row, column) in occupied {
            wall.occupy(coordinate(row, column).unwrap()).unwrap();
        }
        let placed = coordinate(row, column).unwrap();
        wall.occupy(placed).unwrap();

        let actual_points = score_for_placement(&wall, placed).unwrap();

        assert_eq!(expected_points, actual_points);
    }
}
