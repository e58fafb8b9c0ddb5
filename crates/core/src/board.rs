//! Board module - owns the baseline grid and the per-frame working copy
//!
//! The board is a fixed `height x width` grid of single-character cells stored
//! as a flat row-major array. The baseline is captured once at construction and
//! never changes afterwards; every redraw starts from a fresh copy of it.
//! Coordinates: (x, y) where x is the column and y the row, both 0-indexed.

use thiserror::Error;

use crate::entity::Entity;
use crate::types::Position;

/// Errors raised while building a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("static entity {glyph:?} at {position} is outside the board")]
    StaticOutOfBounds { glyph: char, position: Position },
}

/// A rectangular grid of glyphs, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Build a grid from rows, rejecting empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(BoardError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != width {
                return Err(BoardError::Ragged {
                    row,
                    expected: width,
                    found: cols.len(),
                });
            }
            cells.extend(cols);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Get the glyph at `pos`, or None if out of bounds.
    pub fn get(&self, pos: Position) -> Option<char> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Set the glyph at `pos`.
    /// Returns false if out of bounds.
    pub fn set(&mut self, pos: Position, glyph: char) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = glyph;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width)
    }

    pub fn to_rows(&self) -> Vec<Vec<char>> {
        self.rows().map(<[char]>::to_vec).collect()
    }

    /// Overwrite this grid with `other`, reusing the allocation when possible.
    pub fn copy_from(&mut self, other: &Grid) {
        self.width = other.width;
        self.height = other.height;
        self.cells.clear();
        self.cells.extend_from_slice(&other.cells);
    }

    /// Append the text form of the grid to `out`: each row's glyphs with no
    /// separator, rows separated by `'\n'`, no trailing newline.
    pub fn render_into(&self, out: &mut String) {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                out.push('\n');
            }
            out.extend(row.iter());
        }
    }
}

/// The game board: an immutable baseline plus helpers for building frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    baseline: Grid,
}

impl Board {
    /// Create a board from rows of glyphs.
    ///
    /// Fails fast on empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, BoardError> {
        Ok(Self {
            baseline: Grid::from_rows(rows)?,
        })
    }

    /// Create a board from newline-separated text.
    ///
    /// # Examples
    ///
    /// ```
    /// use console_game_core::Board;
    ///
    /// let board = Board::from_text("#####\n#   #\n#####").unwrap();
    /// assert_eq!(board.width(), 5);
    /// assert_eq!(board.height(), 3);
    /// assert_eq!(Board::render(&board.reset()), "#####\n#   #\n#####");
    /// ```
    pub fn from_text(text: &str) -> Result<Self, BoardError> {
        Self::from_rows(text.lines().map(|line| line.chars().collect()).collect())
    }

    /// A `height x width` board filled with `fill`.
    pub fn filled(width: usize, height: usize, fill: char) -> Result<Self, BoardError> {
        Self::from_rows(vec![vec![fill; width]; height])
    }

    /// Stamp static entities into the baseline.
    ///
    /// Non-static entities are skipped; they belong to the game loop.
    pub fn with_statics<'a>(
        mut self,
        statics: impl IntoIterator<Item = &'a Entity>,
    ) -> Result<Self, BoardError> {
        for entity in statics {
            if !entity.is_static() {
                log::warn!(
                    "skipping non-static entity {:?} passed as board terrain",
                    entity.glyph()
                );
                continue;
            }
            if !self.baseline.set(entity.position(), entity.glyph()) {
                return Err(BoardError::StaticOutOfBounds {
                    glyph: entity.glyph(),
                    position: entity.position(),
                });
            }
        }
        Ok(self)
    }

    pub fn width(&self) -> usize {
        self.baseline.width()
    }

    pub fn height(&self) -> usize {
        self.baseline.height()
    }

    /// Highest valid column index.
    pub fn max_col(&self) -> i32 {
        self.baseline.width() as i32 - 1
    }

    /// Highest valid row index.
    pub fn max_row(&self) -> i32 {
        self.baseline.height() as i32 - 1
    }

    pub fn baseline(&self) -> &Grid {
        &self.baseline
    }

    /// A fresh working copy of the baseline.
    pub fn reset(&self) -> Grid {
        self.baseline.clone()
    }

    /// Restore `grid` to the baseline in place.
    pub fn reset_into(&self, grid: &mut Grid) {
        grid.copy_from(&self.baseline);
    }

    /// Text form of a grid.
    pub fn render(grid: &Grid) -> String {
        let mut out = String::with_capacity(grid.height() * (grid.width() + 1));
        grid.render_into(&mut out);
        out
    }

    /// Pull `pos` back inside the board.
    ///
    /// Exactly one axis is corrected per call, checked in the fixed order
    /// column-high, row-high, column-low, row-low. A high overflow is
    /// subtracted from the coordinate; a negative coordinate is pinned to 0.
    /// Returns true if `pos` was changed.
    pub fn clamp(&self, pos: &mut Position) -> bool {
        let max_col = self.max_col();
        let max_row = self.max_row();

        if pos.x > max_col {
            let overflow = pos.x - max_col;
            pos.x -= overflow;
        } else if pos.y > max_row {
            let overflow = pos.y - max_row;
            pos.y -= overflow;
        } else if pos.x < 0 {
            pos.x = 0;
        } else if pos.y < 0 {
            pos.y = 0;
        } else {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_5x5() -> Board {
        Board::filled(5, 5, ' ').unwrap()
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Board::from_rows(vec![vec!['.'; 3], vec!['.'; 2]]).unwrap_err();
        assert_eq!(
            err,
            BoardError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn empty_boards_are_rejected() {
        assert_eq!(Board::from_rows(vec![]).unwrap_err(), BoardError::Empty);
        assert_eq!(Board::from_text("").unwrap_err(), BoardError::Empty);
        assert_eq!(Board::from_rows(vec![vec![]]).unwrap_err(), BoardError::Empty);
    }

    #[test]
    fn reset_never_aliases_the_baseline() {
        let board = board_5x5();
        let mut frame = board.reset();
        assert!(frame.set(Position::new(2, 2), '@'));

        let next = board.reset();
        assert_eq!(next.get(Position::new(2, 2)), Some(' '));
        assert_eq!(board.baseline().get(Position::new(2, 2)), Some(' '));
    }

    #[test]
    fn reset_into_restores_scratch_grid() {
        let board = Board::from_text("ab\ncd").unwrap();
        let mut scratch = board.reset();
        scratch.set(Position::new(1, 1), '@');
        board.reset_into(&mut scratch);
        assert_eq!(scratch, *board.baseline());
    }

    #[test]
    fn grid_indexes_rows_then_columns() {
        let board = Board::from_text("abc\ndef").unwrap();
        let grid = board.reset();
        assert_eq!(grid.get(Position::new(2, 0)), Some('c'));
        assert_eq!(grid.get(Position::new(0, 1)), Some('d'));
        assert_eq!(grid.get(Position::new(3, 0)), None);
        assert_eq!(grid.get(Position::new(0, -1)), None);
    }

    #[test]
    fn render_joins_rows_with_newlines() {
        let board = Board::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']]).unwrap();
        assert_eq!(Board::render(&board.reset()), "ab\ncd");
    }

    #[test]
    fn to_rows_returns_the_original_rows() {
        let rows = vec![vec!['#', '#', '#'], vec!['#', '.', '#']];
        let board = Board::from_rows(rows.clone()).unwrap();
        let mut grid = board.reset();
        assert_eq!(grid.to_rows(), rows);

        grid.set(Position::new(1, 1), '@');
        assert_eq!(grid.to_rows()[1], vec!['#', '@', '#']);
        assert_eq!(board.baseline().to_rows(), rows);
    }

    #[test]
    fn clamp_subtracts_column_overflow() {
        let board = board_5x5();
        let mut pos = Position::new(7, 2);
        assert!(board.clamp(&mut pos));
        assert_eq!(pos, Position::new(4, 2));
    }

    #[test]
    fn clamp_pins_negative_coordinates() {
        let board = board_5x5();
        let mut pos = Position::new(-3, 1);
        assert!(board.clamp(&mut pos));
        assert_eq!(pos, Position::new(0, 1));

        let mut pos = Position::new(1, -1);
        assert!(board.clamp(&mut pos));
        assert_eq!(pos, Position::new(1, 0));
    }

    #[test]
    fn clamp_corrects_one_axis_in_priority_order() {
        let board = board_5x5();

        // Column-high wins over row-high.
        let mut pos = Position::new(6, 6);
        board.clamp(&mut pos);
        assert_eq!(pos, Position::new(4, 6));
        board.clamp(&mut pos);
        assert_eq!(pos, Position::new(4, 4));

        // Row-high wins over column-low.
        let mut pos = Position::new(-1, 9);
        board.clamp(&mut pos);
        assert_eq!(pos, Position::new(-1, 4));

        // Column-low wins over row-low.
        let mut pos = Position::new(-1, -1);
        board.clamp(&mut pos);
        assert_eq!(pos, Position::new(0, -1));
    }

    #[test]
    fn clamp_leaves_in_bounds_positions_alone() {
        let board = board_5x5();
        let mut pos = Position::new(4, 0);
        assert!(!board.clamp(&mut pos));
        assert_eq!(pos, Position::new(4, 0));
    }

    #[test]
    fn statics_are_stamped_into_the_baseline() {
        let wall = Entity::new_static('#', Position::new(1, 0));
        let board = board_5x5().with_statics([&wall]).unwrap();
        assert_eq!(board.reset().get(Position::new(1, 0)), Some('#'));
    }

    #[test]
    fn out_of_bounds_static_is_rejected() {
        let wall = Entity::new_static('#', Position::new(5, 0));
        let err = board_5x5().with_statics([&wall]).unwrap_err();
        assert_eq!(
            err,
            BoardError::StaticOutOfBounds {
                glyph: '#',
                position: Position::new(5, 0)
            }
        );
    }
}
