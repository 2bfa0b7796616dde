//! Dense row-major 2D grid

use std::ops::{Index, IndexMut};

use anyhow::{anyhow, bail};
use aoc_solver::ParseError;
use itertools::Itertools;

/// Grid coordinate as `(row, col)`.
pub type Pos = (usize, usize);

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
const SURROUNDING: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Builds a grid by calling `f` for every position in row-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(Pos) -> T) -> Self {
        let cells = (0..height)
            .cartesian_product(0..width)
            .map(&mut f)
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, (row, col): Pos) -> Option<&T> {
        (row < self.height && col < self.width).then(|| &self.cells[row * self.width + col])
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<T> {
        (0..self.height).cartesian_product(0..self.width)
    }

    pub fn cells(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn cells_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.cells.iter_mut()
    }

    /// Up, left, right and down neighbours that lie inside the grid.
    pub fn orthogonal(&self, pos: Pos) -> impl Iterator<Item = Pos> + use<T> {
        self.offsets(pos, &ORTHOGONAL)
    }

    /// All eight surrounding neighbours that lie inside the grid.
    pub fn surrounding(&self, pos: Pos) -> impl Iterator<Item = Pos> + use<T> {
        self.offsets(pos, &SURROUNDING)
    }

    fn offsets(
        &self,
        (row, col): Pos,
        offsets: &'static [(isize, isize)],
    ) -> impl Iterator<Item = Pos> + use<T> {
        let (width, height) = (self.width, self.height);
        offsets.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < height && c < width).then_some((r, c))
        })
    }
}

impl Grid<u8> {
    /// Parses a rectangular block of decimal digits, one row per line.
    pub fn parse_digits(input: &str) -> Result<Self, ParseError> {
        let rows = input.trim().lines().map(str::trim_end).collect::<Vec<_>>();
        let width = rows.first().map_or(0, |row| row.len());
        if width == 0 {
            return Err(ParseError::MissingData("empty grid".into()));
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (line_idx, row) in rows.iter().enumerate() {
            parse_digit_row(row, width, &mut cells)
                .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e)))?;
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }
}

fn parse_digit_row(row: &str, width: usize, cells: &mut Vec<u8>) -> anyhow::Result<()> {
    if row.len() != width {
        bail!("expected {} digits, found {}", width, row.len());
    }
    for ch in row.chars() {
        let digit = ch
            .to_digit(10)
            .ok_or_else(|| anyhow!("'{}' is not a digit", ch))?;
        cells.push(digit as u8);
    }
    Ok(())
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): Pos) -> &T {
        assert!(row < self.height && col < self.width, "({row}, {col}) outside grid");
        &self.cells[row * self.width + col]
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, (row, col): Pos) -> &mut T {
        assert!(row < self.height && col < self.width, "({row}, {col}) outside grid");
        &mut self.cells[row * self.width + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits() {
        let grid = Grid::parse_digits("123\n456\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid[(1, 2)], 6);
        assert_eq!(grid.get((2, 0)), None);
        assert_eq!(grid.get((0, 3)), None);
    }

    #[test]
    fn test_parse_digits_rejects_ragged_rows() {
        let err = Grid::parse_digits("123\n45").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.starts_with("(line 2)")));
    }

    #[test]
    fn test_parse_digits_rejects_non_digit() {
        assert!(matches!(
            Grid::parse_digits("12x"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(Grid::parse_digits("  \n"), Err(ParseError::MissingData(_))));
    }

    #[test]
    fn test_neighbours_clip_at_edges() {
        let grid = Grid::from_fn(3, 3, |(r, c)| r * 3 + c);
        assert_eq!(grid.orthogonal((0, 0)).collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
        assert_eq!(grid.orthogonal((1, 1)).count(), 4);
        assert_eq!(grid.surrounding((0, 2)).count(), 3);
        assert_eq!(grid.surrounding((1, 1)).count(), 8);
        assert_eq!(grid[(2, 1)], 7);
    }
}
