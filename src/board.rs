//! Character canvas the dartboard and the darts are drawn on.
//!
//! World coordinates span `[-1, 1]` on both axes, `x` growing to the right
//! and `y` growing upwards.  Each world point maps to the nearest cell.

use std::fmt;
use std::f64::consts::PI;

use crate::error::{DartsError, Result};
use crate::geometry::{Circle, Point, Square};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Largest number of cells a canvas may hold.
pub const MAX_CELLS: usize = 1 << 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Border,
    Axis,
    Outline,
    Hit,
    Miss,
}

impl Mark {
    pub fn dart(inside: bool) -> Mark {
        if inside { Mark::Hit } else { Mark::Miss }
    }

    pub fn glyph(self) -> char {
        match self {
            Mark::Border => '#',
            Mark::Axis => '+',
            Mark::Outline => '*',
            Mark::Hit => 'o',
            Mark::Miss => 'x',
        }
    }

    fn color(self) -> &'static str {
        match self {
            Mark::Hit => GREEN,
            Mark::Miss => RED,
            Mark::Border | Mark::Axis | Mark::Outline => BLUE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Option<Mark>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width < 3 || height < 3 {
            return Err(DartsError::CanvasTooSmall { width, height });
        }
        let cells = match width.checked_mul(height) {
            Some(n) if n <= MAX_CELLS => n,
            _ => return Err(DartsError::CanvasTooLarge { width, height }),
        };
        Ok(Canvas { width, height, cells: vec![None; cells] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = None;
        }
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Mark> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells[row * self.width + col]
    }

    /// Cell holding `point`, or `None` when it falls off the board.
    pub fn cell_of(&self, point: &Point) -> Option<(usize, usize)> {
        // NaN fails both comparisons
        let on_board = |v: f64| v >= -1.0 && v <= 1.0;
        if !on_board(point.x) || !on_board(point.y) {
            return None;
        }
        let col = ((point.x + 1.0) / 2.0 * (self.width - 1) as f64).round();
        let row = ((1.0 - point.y) / 2.0 * (self.height - 1) as f64).round();
        Some((col as usize, row as usize))
    }

    pub fn plot(&mut self, point: &Point, mark: Mark) {
        if let Some((col, row)) = self.cell_of(point) {
            self.cells[row * self.width + col] = Some(mark);
        }
    }

    pub fn draw_line(&mut self, start: &Point, end: &Point, mark: Mark) {
        let cols = (end.x - start.x).abs() / 2.0 * (self.width - 1) as f64;
        let rows = (end.y - start.y).abs() / 2.0 * (self.height - 1) as f64;
        let steps = cols.max(rows).ceil().max(1.0) as usize;
        for i in 0 ..= steps {
            let t = i as f64 / steps as f64;
            let p = Point::new(start.x + (end.x - start.x) * t,
                               start.y + (end.y - start.y) * t);
            self.plot(&p, mark);
        }
    }

    /// Outlines a square of side `width` whose top-left corner is `top_left`.
    pub fn draw_square(&mut self, width: f64, top_left: &Point) {
        let top_right = Point::new(top_left.x + width, top_left.y);
        let bottom_left = Point::new(top_left.x, top_left.y - width);
        let bottom_right = Point::new(top_left.x + width, top_left.y - width);
        self.draw_line(top_left, &top_right, Mark::Border);
        self.draw_line(&top_right, &bottom_right, Mark::Border);
        self.draw_line(&bottom_right, &bottom_left, Mark::Border);
        self.draw_line(&bottom_left, top_left, Mark::Border);
    }

    pub fn draw_circle(&mut self, circle: &Circle) {
        // enough samples that consecutive points never skip a cell
        let span = (self.width + self.height) as f64 * circle.radius;
        let steps = (4.0 * span).ceil().max(8.0) as usize;
        for i in 0 .. steps {
            let angle = 2.0 * PI * i as f64 / steps as f64;
            let p = Point::new(circle.center.x + circle.radius * angle.cos(),
                               circle.center.y + circle.radius * angle.sin());
            self.plot(&p, Mark::Outline);
        }
    }

    /// Draws the board outline, both axes and the unit circle.
    pub fn set_up_dartboard(&mut self) {
        let board = Square::dartboard();
        self.draw_square(board.width, &board.top_left());
        self.draw_line(&Point::new(-1.0, 0.0), &Point::new(1.0, 0.0), Mark::Axis);
        self.draw_line(&Point::new(0.0, -1.0), &Point::new(0.0, 1.0), Mark::Axis);
        self.draw_circle(&Circle::UNIT);
    }

    pub fn render(&self, color: bool) -> String {
        let mut s = String::with_capacity((self.width + 1) * self.height);
        for row in self.cells.chunks(self.width) {
            for cell in row {
                match *cell {
                    Some(mark) if color => {
                        s.push_str(mark.color());
                        s.push(mark.glyph());
                        s.push_str(RESET);
                    }
                    Some(mark) => s.push(mark.glyph()),
                    None => s.push(' '),
                }
            }
            s.push('\n');
        }
        s
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
