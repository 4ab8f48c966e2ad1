use macroquad::prelude::*;

use crate::config::{
    FFP_PENALTY_FACTOR, FFP_SPAWN_INTERVAL_MS, INITIAL_SPEED, POUNDS_PER_FOOD, SPEED_GROWTH,
    SPEED_RAMP_EVERY,
};
use crate::game::clock::StepGate;
use crate::game::grid::{Cell, Grid, Heading};
use crate::game::world::{Ffp, Food};
use crate::game::worm::Worm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Character {
    InvestmentFund,
    FootballOwner,
}

impl Character {
    pub fn label(self) -> &'static str {
        match self {
            Character::InvestmentFund => "Investment Fund",
            Character::FootballOwner => "Football Team Owner",
        }
    }

    pub fn head_color(self) -> Color {
        match self {
            Character::InvestmentFund => Color::from_rgba(228, 190, 160, 255),
            Character::FootballOwner => Color::from_rgba(190, 150, 120, 255),
        }
    }

    pub fn trim_color(self) -> Color {
        match self {
            Character::InvestmentFund => Color::from_rgba(60, 60, 80, 255),
            Character::FootballOwner => Color::from_rgba(30, 60, 140, 255),
        }
    }
}

/// One game, created on character selection and dropped on reset. All
/// simulation state lives here; the frame loop only feeds it input,
/// timestamps, and view bounds.
pub struct Session {
    pub character: Character,
    pub grid: Grid,
    pub worm: Worm,
    pub food: Food,
    pub ffp: Option<Ffp>,
    pub score: u32,
    pub speed: f32,
    pub game_over: bool,
    pub gate: StepGate,
    pub(crate) last_ffp_spawn_ms: f64,
}

impl Session {
    pub fn new(character: Character, grid: Grid, now_ms: f64) -> Self {
        let worm = Worm::new_at(Cell::new(grid.cols / 4, grid.rows / 2), Heading::Right);
        let food = Food::random(&grid);
        info!("kick-off: {} on a {}x{} pitch", character.label(), grid.cols, grid.rows);
        Self {
            character,
            grid,
            worm,
            food,
            ffp: None,
            score: 0,
            speed: INITIAL_SPEED,
            game_over: false,
            gate: StepGate::new(),
            last_ffp_spawn_ms: now_ms,
        }
    }

    /// Per-frame entry point: advances at most one tick, then runs the
    /// wall-clock keyed card spawn.
    pub fn frame(&mut self, now_ms: f64) {
        if self.gate.should_step(now_ms, self.speed) {
            self.tick();
        }
        self.maybe_spawn_ffp(now_ms);
    }

    pub fn tick(&mut self) {
        if self.game_over {
            return;
        }

        self.worm.step();
        self.worm.tick_food_wave();

        let head = self.worm.head();

        if !self.grid.contains(head) {
            self.game_over = true;
            info!("full time: left the pitch at £{}", self.money());
            return;
        }

        if self.worm.self_collision() {
            self.game_over = true;
            info!("full time: own goal at £{}", self.money());
            return;
        }

        if self.food.covers(head) {
            self.worm.trigger_food_wave();
            self.food = Food::random(&self.grid);
            self.score += 1;
            if self.score % SPEED_RAMP_EVERY == 0 {
                self.speed *= SPEED_GROWTH;
            }
        }

        if let Some(ffp) = self.ffp {
            if ffp.cell == head {
                self.score = (self.score as f32 * FFP_PENALTY_FACTOR).floor() as u32;
                self.ffp = None;
            }
        }
    }

    pub fn maybe_spawn_ffp(&mut self, now_ms: f64) {
        if self.game_over || self.ffp.is_some() {
            return;
        }
        if now_ms - self.last_ffp_spawn_ms > FFP_SPAWN_INTERVAL_MS {
            self.ffp = Ffp::place(&self.grid, &self.worm, &self.food);
            self.last_ffp_spawn_ms = now_ms;
        }
    }

    /// Resize reconciliation: bounds are recomputed, positions are not
    /// renormalised. Stale out-of-bounds segments fall to the wall test
    /// within a tick.
    pub fn set_bounds(&mut self, grid: Grid) {
        self.grid = grid;
    }

    pub fn money(&self) -> u32 {
        self.score * POUNDS_PER_FOOD
    }
}
