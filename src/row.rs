use std::ops::{Index, IndexMut};

use crate::cell::Cell;

/// An ordered sequence of cells.
///
/// Rows in the same table may have different lengths. The renderer pads
/// short rows with empty cells and ignores cells beyond the table's column
/// count; direct indexed access here stays strict and panics out of bounds,
/// with [`Row::get`] as the checked alternative.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a cell from any value convertible into one.
    pub fn add_cell(&mut self, cell: impl Into<Cell>) -> &mut Self {
        self.cells.push(cell.into());
        self
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl Index<usize> for Row {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

impl IndexMut<usize> for Row {
    fn index_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }
}

impl<C: Into<Cell>> FromIterator<C> for Row {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<C: Into<Cell>, const N: usize> From<[C; N]> for Row {
    fn from(cells: [C; N]) -> Self {
        cells.into_iter().collect()
    }
}

impl<C: Into<Cell>> From<Vec<C>> for Row {
    fn from(cells: Vec<C>) -> Self {
        cells.into_iter().collect()
    }
}

impl<'r> IntoIterator for &'r Row {
    type Item = &'r Cell;
    type IntoIter = std::slice::Iter<'r, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_index() {
        let mut row = Row::new();
        row.add_cell("a").add_cell(Cell::new("b"));

        assert_eq!(row.len(), 2);
        assert_eq!(row[0].value(), "a");
        assert_eq!(row[1].value(), "b");
    }

    #[test]
    fn get_is_checked() {
        let row = Row::from(["only"]);
        assert!(row.get(0).is_some());
        assert!(row.get(1).is_none());
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let row = Row::from(["only"]);
        let _ = &row[3];
    }

    #[test]
    fn from_collections() {
        let a = Row::from(vec!["x", "y"]);
        let b: Row = ["x", "y"].into_iter().collect();
        assert_eq!(a, b);
    }
}
