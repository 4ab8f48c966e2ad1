use macroquad::prelude::*;

mod config;
mod game;

fn window_conf() -> Conf {
    Conf {
        window_title: "Long Worm".to_owned(),
        // Landscape (pitch format)
        window_width: 1200,
        window_height: 800,
        ..Default::default()
    }
}

fn main() {
    macroquad::Window::from_config(window_conf(), game::r#loop::run());
}
