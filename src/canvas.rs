use crate::color::Rgb;

/// Smallest allowed canvas side, in cells
pub const MIN_CANVAS_SIZE: usize = 1;
/// Largest allowed canvas side, in cells
pub const MAX_CANVAS_SIZE: usize = 128;

/// The paint state of a single grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Transparent, nothing painted yet
    #[default]
    Empty,
    Color(Rgb),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn color(&self) -> Option<Rgb> {
        match self {
            Cell::Empty => None,
            Cell::Color(rgb) => Some(*rgb),
        }
    }
}

/// A cell coordinate, `x` to the right and `y` down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
}

impl GridPos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A fixed-size grid of cells.
///
/// Cloning deep-copies every cell, which is what the undo history relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Create an empty canvas. Dimensions are clamped to the allowed range.
    pub fn new(width: usize, height: usize) -> Self {
        let width = clamp_size(width);
        let height = clamp_size(height);
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: GridPos) -> usize {
        assert!(
            self.contains(pos),
            "cell {:?} is outside the {}x{} canvas",
            pos,
            self.width,
            self.height
        );
        pos.y * self.width + pos.x
    }

    /// Read a cell. Panics if `pos` is outside the canvas.
    pub fn get(&self, pos: GridPos) -> Cell {
        self.cells[self.index(pos)]
    }

    /// Write a cell. Panics if `pos` is outside the canvas.
    pub fn set(&mut self, pos: GridPos, cell: Cell) {
        let index = self.index(pos);
        self.cells[index] = cell;
    }

    /// Replace the grid with an empty one of the given size.
    ///
    /// Returns the dimensions actually applied after clamping to
    /// `MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE`. Clearing undo history is the
    /// caller's job, see `EditorSession::resize_canvas`.
    pub fn resize(&mut self, width: usize, height: usize) -> (usize, usize) {
        *self = Canvas::new(width, height);
        (self.width, self.height)
    }

    /// Iterate over every cell with its position, row by row
    pub fn cells(&self) -> impl Iterator<Item = (GridPos, Cell)> + '_ {
        self.cells.iter().enumerate().map(move |(index, cell)| {
            (GridPos::new(index % self.width, index / self.width), *cell)
        })
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }
}

fn clamp_size(size: usize) -> usize {
    size.clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE)
}
