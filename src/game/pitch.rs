use macroquad::prelude::*;

use crate::config::{CENTER_CIRCLE_RADIUS, PENALTY_AREA_HEIGHT, PENALTY_AREA_WIDTH};
use crate::game::grid::Grid;

/// Striped turf plus markings, all derived from the current grid geometry so
/// the pitch follows a resize.
pub fn draw(grid: &Grid) {
    let w = screen_width();
    let h = screen_height();
    let cell = grid.cell;
    let line = Color::from_rgba(255, 255, 255, 255);

    let stripe = cell * 2.0;
    let mut x = 0.0;
    let mut light = true;
    while x < w {
        let turf = if light {
            Color::from_rgba(58, 112, 47, 255)
        } else {
            Color::from_rgba(45, 90, 39, 255)
        };
        draw_rectangle(x, 0.0, stripe, h, turf);
        x += stripe;
        light = !light;
    }

    // Outline, one cell in from the border
    draw_rectangle_lines(cell, cell, w - 2.0 * cell, h - 2.0 * cell, 2.0, line);

    // Centre line and circle
    draw_line(w * 0.5, cell, w * 0.5, h - cell, 2.0, line);
    draw_circle_lines(w * 0.5, h * 0.5, CENTER_CIRCLE_RADIUS as f32 * cell, 2.0, line);

    // Penalty areas
    let pw = PENALTY_AREA_WIDTH as f32 * cell;
    let ph = PENALTY_AREA_HEIGHT as f32 * cell;
    let py = (h - ph) * 0.5;
    draw_rectangle_lines(cell, py, pw, ph, 2.0, line);
    draw_rectangle_lines(w - cell - pw, py, pw, ph, 2.0, line);

    // Six-yard boxes
    let sw = pw * 0.5;
    let sh = ph * 0.5;
    let sy = (h - sh) * 0.5;
    draw_rectangle_lines(cell, sy, sw, sh, 2.0, line);
    draw_rectangle_lines(w - cell - sw, sy, sw, sh, 2.0, line);
}
