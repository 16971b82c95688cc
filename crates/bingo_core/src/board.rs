//! Board state and line predicates.
//!
//! A board is a row-major vector of `rows × columns` cells holding a
//! permutation of `1..=N`, each cell carrying a revealed flag that only ever
//! flips false→true. Lines (one per row, one per column) are never stored;
//! [`Board::line_filled`] computes them by index arithmetic over the flat
//! cell vector, since the partition is static for a run's fixed geometry.

use serde::{Deserialize, Serialize};

use crate::rng::DrawSource;

/// Board geometry: rows × columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Geometry {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub columns: u32,
}

impl Geometry {
    /// Creates a geometry of `rows` × `columns`.
    #[inline]
    pub fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    /// Total number of cells, `N = rows × columns`.
    #[inline]
    pub fn cell_count(&self) -> u32 {
        self.rows * self.columns
    }

    /// Total number of lines, `rows + columns`.
    #[inline]
    pub fn line_count(&self) -> u32 {
        self.rows + self.columns
    }
}

/// One board cell: a value in `1..=N` and its revealed flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// The number written on this cell.
    pub value: u32,
    /// Whether this cell's number has been drawn.
    pub revealed: bool,
}

/// An R×C board holding a permutation of `1..=N` with reveal tracking.
///
/// Owned exclusively by one trial for its lifetime. Lookup of the cell
/// holding a given value is O(1) through a value→position index built once at
/// construction.
#[derive(Clone, Debug)]
pub struct Board {
    geometry: Geometry,
    /// Cells in row-major order.
    cells: Vec<Cell>,
    /// `position[value - 1]` is the index of the cell holding `value`.
    position: Vec<usize>,
    revealed: u32,
}

impl Board {
    /// Creates a board holding a uniformly random permutation of `1..=N`,
    /// all cells unrevealed.
    ///
    /// The shuffle is a Fisher–Yates pass driven by `source`, so a board is
    /// reproducible from the source's seed.
    pub fn shuffled(geometry: Geometry, source: &mut impl DrawSource) -> Self {
        let n = geometry.cell_count() as usize;
        let mut values: Vec<u32> = (1..=geometry.cell_count()).collect();
        for i in (1..n).rev() {
            let j = source.draw(0, i as u32) as usize;
            values.swap(i, j);
        }
        Self::from_values(geometry, values)
    }

    /// Creates a board from a fixed arrangement of values in row-major
    /// order. Intended for deterministic tests.
    ///
    /// # Panics
    ///
    /// Panics if `values` is not a permutation of `1..=N` for the geometry.
    pub fn from_values(geometry: Geometry, values: Vec<u32>) -> Self {
        let n = geometry.cell_count() as usize;
        assert_eq!(values.len(), n, "board requires exactly {} values", n);

        let mut position = vec![usize::MAX; n];
        let cells: Vec<Cell> = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                assert!(
                    value >= 1 && value as usize <= n,
                    "cell value {} outside 1..={}",
                    value,
                    n
                );
                assert_eq!(
                    position[value as usize - 1],
                    usize::MAX,
                    "duplicate cell value {}",
                    value
                );
                position[value as usize - 1] = index;
                Cell {
                    value,
                    revealed: false,
                }
            })
            .collect();

        Self {
            geometry,
            cells,
            position,
            revealed: 0,
        }
    }

    /// Returns the board geometry.
    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Marks the cell holding `value` as revealed.
    ///
    /// Returns `true` if a cell was newly revealed, `false` if no such cell
    /// exists or it was already revealed (no-op either way).
    pub fn reveal(&mut self, value: u32) -> bool {
        if value == 0 || value > self.geometry.cell_count() {
            return false;
        }
        let index = self.position[value as usize - 1];
        if self.cells[index].revealed {
            return false;
        }
        self.cells[index].revealed = true;
        self.revealed += 1;
        true
    }

    /// Returns whether the cell holding `value` is revealed.
    ///
    /// Values outside `1..=N` are reported as unrevealed.
    pub fn is_revealed(&self, value: u32) -> bool {
        if value == 0 || value > self.geometry.cell_count() {
            return false;
        }
        self.cells[self.position[value as usize - 1]].revealed
    }

    /// Number of revealed cells across the whole board.
    #[inline]
    pub fn revealed_count(&self) -> u32 {
        self.revealed
    }

    /// Returns whether every cell of the given line is revealed.
    ///
    /// Lines are indexed rows first: `0..rows` are rows top to bottom,
    /// `rows..rows+columns` are columns left to right. Row `j` covers cells
    /// `[C·j, C·j+C)`; column `j` covers cells `{j, j+C, j+2C, …}`.
    ///
    /// # Panics
    ///
    /// Panics if `line >= rows + columns`.
    pub fn line_filled(&self, line: usize) -> bool {
        let rows = self.geometry.rows as usize;
        let columns = self.geometry.columns as usize;
        assert!(line < rows + columns, "line index {} out of range", line);

        if line < rows {
            let start = line * columns;
            self.cells[start..start + columns].iter().all(|c| c.revealed)
        } else {
            let column = line - rows;
            (0..rows)
                .map(|row| &self.cells[row * columns + column])
                .all(|c| c.revealed)
        }
    }

    /// Cell values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().map(|c| c.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededSource;

    fn row_major_board() -> Board {
        let geometry = Geometry::new(5, 5);
        Board::from_values(geometry, (1..=25).collect())
    }

    #[test]
    fn test_geometry_counts() {
        let geometry = Geometry::new(5, 5);
        assert_eq!(geometry.cell_count(), 25);
        assert_eq!(geometry.line_count(), 10);

        let tall = Geometry::new(7, 3);
        assert_eq!(tall.cell_count(), 21);
        assert_eq!(tall.line_count(), 10);
    }

    #[test]
    fn test_shuffled_board_is_permutation() {
        let geometry = Geometry::new(5, 5);
        let mut source = SeededSource::from_seed(42);
        let board = Board::shuffled(geometry, &mut source);

        let mut values: Vec<u32> = board.values().collect();
        values.sort_unstable();
        assert_eq!(values, (1..=25).collect::<Vec<u32>>());
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn test_shuffled_boards_differ_across_seeds() {
        let geometry = Geometry::new(5, 5);
        let mut a = SeededSource::from_seed(1);
        let mut b = SeededSource::from_seed(2);

        let board_a: Vec<u32> = Board::shuffled(geometry, &mut a).values().collect();
        let board_b: Vec<u32> = Board::shuffled(geometry, &mut b).values().collect();
        assert_ne!(board_a, board_b);
    }

    #[test]
    fn test_reveal_semantics() {
        let mut board = row_major_board();

        assert!(board.reveal(13));
        assert!(board.is_revealed(13));
        assert_eq!(board.revealed_count(), 1);

        // Already revealed: no-op
        assert!(!board.reveal(13));
        assert_eq!(board.revealed_count(), 1);

        // Out of range: no-op
        assert!(!board.reveal(0));
        assert!(!board.reveal(26));
        assert_eq!(board.revealed_count(), 1);
    }

    #[test]
    fn test_row_line_filled_by_index_arithmetic() {
        let mut board = row_major_board();

        // Row 1 holds values 6..=10 in a row-major board.
        for value in 6..=9 {
            board.reveal(value);
            assert!(!board.line_filled(1));
        }
        board.reveal(10);
        assert!(board.line_filled(1));
        assert!(!board.line_filled(0));
    }

    #[test]
    fn test_column_line_filled_by_index_arithmetic() {
        let mut board = row_major_board();

        // Column 2 (line index 5 + 2) holds 3, 8, 13, 18, 23.
        for value in [3, 8, 13, 18] {
            board.reveal(value);
            assert!(!board.line_filled(7));
        }
        board.reveal(23);
        assert!(board.line_filled(7));
    }

    #[test]
    fn test_non_square_lines() {
        let geometry = Geometry::new(2, 3);
        let mut board = Board::from_values(geometry, (1..=6).collect());

        // Row 0: values 1, 2, 3. Column 0 (line 2): values 1, 4.
        board.reveal(1);
        board.reveal(4);
        assert!(board.line_filled(2));
        assert!(!board.line_filled(0));

        board.reveal(2);
        board.reveal(3);
        assert!(board.line_filled(0));
    }

    #[test]
    #[should_panic]
    fn test_from_values_rejects_duplicates() {
        Board::from_values(Geometry::new(2, 2), vec![1, 2, 2, 4]);
    }

    #[test]
    #[should_panic]
    fn test_line_filled_rejects_out_of_range() {
        row_major_board().line_filled(10);
    }
}
