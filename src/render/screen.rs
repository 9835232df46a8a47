use std::fmt;

/// Verdict for one character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// The ray met the surface.
    Hit,
    /// No surface along the ray, or the solve failed.
    #[default]
    Empty,
}

impl Cell {
    /// Glyph drawn for this cell.
    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::Hit => '*',
            Self::Empty => ' ',
        }
    }
}

/// Row-major grid of cells, overwritten in full every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenBuffer {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl ScreenBuffer {
    /// Creates an empty `height x width` buffer.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the cell at `(row, col)`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Iterates over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // `max(1)` keeps `chunks` valid for a zero-width buffer.
        self.cells.chunks(self.width.max(1))
    }

    /// Mutable row slices, used by the renderers.
    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, Cell> {
        self.cells.chunks_mut(self.width.max(1))
    }

    /// Mutable flat cell storage.
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Counts hit cells.
    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Hit).count()
    }

    /// Formats one row: each glyph followed by a space.
    #[must_use]
    pub fn row_text(row: &[Cell]) -> String {
        let mut line = String::with_capacity(row.len() * 2);
        for cell in row {
            line.push(cell.glyph());
            line.push(' ');
        }
        line
    }
}

impl fmt::Display for ScreenBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", Self::row_text(row))?;
        }
        Ok(())
    }
}
