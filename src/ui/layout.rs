/// Pixel geometry of the board: how many cells and how big each one is drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl GridLayout {
    /// Fit `columns x rows` cells into the window using whole-pixel cell sizes
    pub fn new(window_width: u32, window_height: u32, columns: usize, rows: usize) -> Self {
        let cell_width = window_width / columns.max(1) as u32;
        let cell_height = window_height / rows.max(1) as u32;
        Self {
            columns,
            rows,
            cell_width: cell_width as f32,
            cell_height: cell_height as f32,
        }
    }

    pub fn pixel_width(&self) -> f32 {
        self.columns as f32 * self.cell_width
    }

    pub fn pixel_height(&self) -> f32 {
        self.rows as f32 * self.cell_height
    }

    /// Cell under a window position, or `None` outside the board
    pub fn cell_at(&self, point: (f32, f32)) -> Option<(usize, usize)> {
        let (px, py) = point;
        if !(px >= 0.0 && py >= 0.0) || self.cell_width <= 0.0 || self.cell_height <= 0.0 {
            return None;
        }

        let x = (px / self.cell_width).floor() as usize;
        let y = (py / self.cell_height).floor() as usize;
        (x < self.columns && y < self.rows).then_some((x, y))
    }

    /// Top-left pixel of a cell
    pub fn cell_origin(&self, x: usize, y: usize) -> (f32, f32) {
        (x as f32 * self.cell_width, y as f32 * self.cell_height)
    }
}
