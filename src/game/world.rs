use macroquad::prelude::*;
use macroquad::rand::gen_range;

use crate::config::FFP_PLACE_MAX_ATTEMPTS;
use crate::game::grid::{Cell, Grid};
use crate::game::worm::Worm;

/// A five pound note lying across two horizontally adjacent cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub cell: Cell,
}

impl Food {
    /// Uniform over the grid; the x range leaves room for the second cell.
    /// Overlap with the worm is not rejected.
    pub fn random(grid: &Grid) -> Self {
        let x = gen_range(0, (grid.cols - 1).max(1));
        let y = gen_range(0, grid.rows.max(1));
        Self { cell: Cell::new(x, y) }
    }

    pub fn cells(&self) -> [Cell; 2] {
        [self.cell, self.cell.offset(1, 0)]
    }

    pub fn covers(&self, c: Cell) -> bool {
        self.cells().contains(&c)
    }

    pub fn draw(&self, grid: &Grid) {
        let p = grid.cell_origin(self.cell);
        let w = grid.cell * 1.8;
        let h = grid.cell * 0.7;
        let y = p.y + grid.cell * 0.15;

        draw_rectangle(p.x, y, w, h, Color::from_rgba(150, 200, 190, 255));
        draw_rectangle_lines(p.x, y, w, h, 2.0, Color::from_rgba(60, 110, 100, 255));
        draw_text(
            "£5",
            p.x + w * 0.30,
            y + h * 0.78,
            grid.cell * 0.6,
            Color::from_rgba(40, 80, 70, 255),
        );
    }
}

/// The FFP red card. At most one exists; picking it up halves the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ffp {
    pub cell: Cell,
}

impl Ffp {
    /// Rejects cells under the worm or the food; gives up after a bounded
    /// number of attempts on a crowded board.
    pub fn place(grid: &Grid, worm: &Worm, food: &Food) -> Option<Self> {
        for _ in 0..FFP_PLACE_MAX_ATTEMPTS {
            let cell = Cell::new(gen_range(0, grid.cols.max(1)), gen_range(0, grid.rows.max(1)));
            if worm.occupies(cell) || food.covers(cell) {
                continue;
            }
            return Some(Self { cell });
        }
        None
    }

    pub fn draw(&self, grid: &Grid) {
        let p = grid.cell_origin(self.cell);
        let inset_x = grid.cell * 0.22;
        let inset_y = grid.cell * 0.10;
        let w = grid.cell - 2.0 * inset_x;
        let h = grid.cell - 2.0 * inset_y;

        draw_rectangle(p.x + inset_x, p.y + inset_y, w, h, Color::from_rgba(210, 40, 40, 255));
        draw_rectangle_lines(
            p.x + inset_x,
            p.y + inset_y,
            w,
            h,
            2.0,
            Color::from_rgba(255, 255, 255, 200),
        );
    }
}
