use macroquad::prelude::*;

use crate::game::session::Character;

/// Immediate-mode selection screen. Drawn every frame until a tile is
/// picked; the caller creates the session from the returned character.
pub fn update() -> Option<Character> {
    clear_background(Color::from_rgba(12, 18, 12, 255));

    let w = screen_width();
    let h = screen_height();

    let title = "LONG WORM";
    let mt = measure_text(title, None, 64, 1.0);
    draw_text(title, (w - mt.width) * 0.5, h * 0.20, 64.0, GOLD);

    let subtitle = "Choose Your Character";
    let ms = measure_text(subtitle, None, 32, 1.0);
    draw_text(
        subtitle,
        (w - ms.width) * 0.5,
        h * 0.20 + 48.0,
        32.0,
        WHITE,
    );

    let tile_w = 260.0;
    let tile_h = 280.0;
    let gap = 60.0;
    let top = h * 0.38;
    let left = w * 0.5 - tile_w - gap * 0.5;
    let right = w * 0.5 + gap * 0.5;

    if tile(left, top, tile_w, tile_h, Character::InvestmentFund) {
        return Some(Character::InvestmentFund);
    }
    if tile(right, top, tile_w, tile_h, Character::FootballOwner) {
        return Some(Character::FootballOwner);
    }

    None
}

fn tile(x: f32, y: f32, w: f32, h: f32, character: Character) -> bool {
    let hovered = {
        let (mx, my) = mouse_position();
        mx >= x && mx <= x + w && my >= y && my <= y + h
    };
    let mut pressed = hovered && is_mouse_button_pressed(MouseButton::Left);
    for t in touches() {
        if t.phase == TouchPhase::Started
            && t.position.x >= x
            && t.position.x <= x + w
            && t.position.y >= y
            && t.position.y <= y + h
        {
            pressed = true;
        }
    }

    let bg = if hovered {
        Color::from_rgba(68, 68, 68, 255)
    } else {
        Color::from_rgba(51, 51, 51, 255)
    };
    let border = if hovered { GOLD } else { WHITE };
    draw_rectangle(x, y, w, h, bg);
    draw_rectangle_lines(x, y, w, h, 3.0, border);

    // Head preview
    let head = 120.0;
    let hx = x + (w - head) * 0.5;
    let hy = y + 36.0;
    draw_rectangle(hx, hy, head, head, character.head_color());
    draw_rectangle_lines(hx, hy, head, head, 3.0, character.trim_color());
    draw_circle(hx + head * 0.62, hy + head * 0.40, 6.0, BLACK);
    draw_circle(hx + head * 0.86, hy + head * 0.40, 6.0, BLACK);

    let label = character.label();
    let ml = measure_text(label, None, 24, 1.0);
    draw_text(label, x + (w - ml.width) * 0.5, y + h - 40.0, 24.0, WHITE);

    pressed
}
