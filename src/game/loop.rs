use macroquad::prelude::*;

use crate::config::{MIN_SCALE, UI_PAD_MARGIN, UI_PAD_RADIUS, UI_PAD_SPREAD};
use crate::game::grid::{Facing, Grid, Heading};
use crate::game::pitch;
use crate::game::select;
use crate::game::session::Session;

pub async fn run() {
    macroquad::rand::srand(macroquad::miniquad::date::now() as u64);

    let mut session: Option<Session> = None;

    loop {
        let now_ms = get_time() * 1000.0;
        let view = Grid::from_view(screen_width(), screen_height());

        // Character selection runs until a game exists.
        if session.is_none() {
            if let Some(character) = select::update() {
                session = Some(Session::new(character, view, now_ms));
            }
            next_frame().await;
            continue;
        }

        let mut want_restart = false;
        if let Some(game) = session.as_mut() {
            game.set_bounds(view);

            // Input only stages the pending heading; the tick consumes it.
            if !game.game_over {
                if is_key_pressed(KeyCode::Up) {
                    game.worm.set_heading(Heading::Up);
                }
                if is_key_pressed(KeyCode::Down) {
                    game.worm.set_heading(Heading::Down);
                }
                if is_key_pressed(KeyCode::Left) {
                    game.worm.set_heading(Heading::Left);
                }
                if is_key_pressed(KeyCode::Right) {
                    game.worm.set_heading(Heading::Right);
                }
            }

            game.frame(now_ms);

            pitch::draw(&game.grid);
            game.food.draw(&game.grid);
            if let Some(ffp) = &game.ffp {
                ffp.draw(&game.grid);
            }
            draw_worm(game);

            // Score HUD
            draw_text(&format!("£{}", game.money()), 10.0, 40.0, 36.0, WHITE);

            // Touch pads stage headings exactly like the arrow keys.
            let pad_center = vec2(UI_PAD_MARGIN, screen_height() - UI_PAD_MARGIN);
            let mut pad_heading: Option<Heading> = None;
            for heading in [Heading::Up, Heading::Down, Heading::Left, Heading::Right] {
                let (dx, dy) = heading.delta();
                let center = pad_center + vec2(dx as f32, dy as f32) * UI_PAD_SPREAD;
                if dir_button(center, heading) {
                    pad_heading = Some(heading);
                }
            }
            if let Some(heading) = pad_heading {
                if !game.game_over {
                    game.worm.set_heading(heading);
                }
            }

            if game.game_over {
                want_restart = draw_game_over(game);
                if is_key_pressed(KeyCode::R) {
                    want_restart = true;
                }
            }
        }

        if want_restart {
            info!("restart: back to character selection");
            session = None;
        }

        next_frame().await;
    }
}

fn draw_worm(game: &Session) {
    let grid = &game.grid;
    let cell = grid.cell;

    for i in (1..game.worm.len()).rev() {
        let seg = game.worm.body[i];
        let scale = game.worm.segment_scales.get(i).copied().unwrap_or(MIN_SCALE);
        let size = cell * scale;
        let off = (size - cell) * 0.5;
        let p = grid.cell_origin(seg);
        draw_rectangle(p.x - off, p.y - off, size - 1.0, size - 1.0, WHITE);
    }

    // Head on top, in the character palette, eyes toward travel.
    let head = game.worm.head();
    let scale = game.worm.segment_scales[0];
    let size = cell * scale;
    let off = (size - cell) * 0.5;
    let p = grid.cell_origin(head);
    draw_rectangle(p.x - off, p.y - off, size, size, game.character.head_color());
    draw_rectangle_lines(p.x - off, p.y - off, size, size, 2.0, game.character.trim_color());

    let center = vec2(p.x - off + size * 0.5, p.y - off + size * 0.5);
    let fwd = match game.worm.facing() {
        Facing::Up => vec2(0.0, -1.0),
        Facing::Down => vec2(0.0, 1.0),
        Facing::Left => vec2(-1.0, 0.0),
        Facing::Right => vec2(1.0, 0.0),
    };
    let side = vec2(-fwd.y, fwd.x);
    for s in [-1.0f32, 1.0] {
        let eye = center + fwd * size * 0.22 + side * s * size * 0.16;
        draw_circle(eye.x, eye.y, size * 0.07, BLACK);
    }
}

/// Returns true when the restart button is pressed.
fn draw_game_over(game: &Session) -> bool {
    let w = screen_width();
    let h = screen_height();

    draw_rectangle(0.0, 0.0, w, h, Color::from_rgba(0, 0, 0, 204));

    let title = "GAME OVER";
    let mt = measure_text(title, None, 64, 1.0);
    draw_text(title, (w - mt.width) * 0.5, h * 0.5 - 60.0, 64.0, GOLD);

    let score = format!("Final Score: £{}", game.money());
    let ms = measure_text(&score, None, 32, 1.0);
    draw_text(&score, (w - ms.width) * 0.5, h * 0.5, 32.0, WHITE);

    let hint = "Press R to restart";
    let mh = measure_text(hint, None, 24, 1.0);
    draw_text(hint, (w - mh.width) * 0.5, h * 0.5 + 48.0, 24.0, GOLD);

    // Tap target for touch screens
    let bw = 220.0;
    let bh = 56.0;
    let bx = (w - bw) * 0.5;
    let by = h * 0.5 + 80.0;
    let hovered = {
        let (mx, my) = mouse_position();
        mx >= bx && mx <= bx + bw && my >= by && my <= by + bh
    };
    let mut pressed = hovered && is_mouse_button_pressed(MouseButton::Left);
    for t in touches() {
        if t.phase == TouchPhase::Started
            && t.position.x >= bx
            && t.position.x <= bx + bw
            && t.position.y >= by
            && t.position.y <= by + bh
        {
            pressed = true;
        }
    }
    let fill = if hovered {
        Color::from_rgba(90, 210, 255, 70)
    } else {
        Color::from_rgba(255, 255, 255, 25)
    };
    draw_rectangle(bx, by, bw, bh, fill);
    draw_rectangle_lines(bx, by, bw, bh, 2.0, Color::from_rgba(255, 255, 255, 90));
    let label = "RESTART";
    let ml = measure_text(label, None, 28, 1.0);
    draw_text(label, bx + (bw - ml.width) * 0.5, by + bh * 0.66, 28.0, WHITE);

    pressed
}

/// One on-screen direction pad. Draws and hit-tests in the same pass.
fn dir_button(center: Vec2, heading: Heading) -> bool {
    let pressed = {
        let mut hit = false;
        let (mx, my) = mouse_position();
        if is_mouse_button_pressed(MouseButton::Left)
            && point_in_circle(vec2(mx, my), center, UI_PAD_RADIUS)
        {
            hit = true;
        }
        for t in touches() {
            if t.phase == TouchPhase::Started
                && point_in_circle(t.position, center, UI_PAD_RADIUS)
            {
                hit = true;
            }
        }
        hit
    };

    draw_circle(center.x, center.y, UI_PAD_RADIUS, Color::from_rgba(255, 255, 255, 25));
    draw_circle_lines(center.x, center.y, UI_PAD_RADIUS, 2.0, Color::from_rgba(255, 255, 255, 50));

    let (dx, dy) = heading.delta();
    let fwd = vec2(dx as f32, dy as f32);
    let side = vec2(-fwd.y, fwd.x);
    let tip = center + fwd * UI_PAD_RADIUS * 0.55;
    let base = center - fwd * UI_PAD_RADIUS * 0.25;
    let a = base + side * UI_PAD_RADIUS * 0.40;
    let b = base - side * UI_PAD_RADIUS * 0.40;
    draw_triangle(tip, a, b, Color::from_rgba(255, 255, 255, 110));

    pressed
}

fn point_in_circle(p: Vec2, center: Vec2, radius: f32) -> bool {
    p.distance_squared(center) <= radius * radius
}
