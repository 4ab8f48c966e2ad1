use std::collections::VecDeque;
use std::f32::consts::PI;

use crate::config::{ANIMATION_PERIOD, MAX_SCALE, MIN_SCALE};
use crate::game::grid::{Cell, Facing, Heading};

/// The pulse that travels head-to-tail after eating. Growth is applied by the
/// first `step` after the pulse has left the tail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoodWave {
    Idle,
    Running { position: usize, counter: u32 },
}

pub struct Worm {
    pub body: VecDeque<Cell>,
    pub heading: Heading,
    pub pending_heading: Heading,
    pub pending_growth: bool,
    /// Index-aligned with `body`; animation only.
    pub segment_scales: Vec<f32>,
    pub food_wave: FoodWave,
}

impl Worm {
    pub fn new_at(head: Cell, heading: Heading) -> Self {
        let mut body = VecDeque::new();
        body.push_back(head);
        Self {
            body,
            heading,
            pending_heading: heading,
            pending_growth: false,
            segment_scales: vec![MIN_SCALE],
            food_wave: FoodWave::Idle,
        }
    }

    #[allow(dead_code)]
    pub fn from_cells(cells: &[Cell], heading: Heading) -> Self {
        let body: VecDeque<Cell> = cells.iter().copied().collect();
        let segment_scales = vec![MIN_SCALE; body.len()];
        Self {
            body,
            heading,
            pending_heading: heading,
            pending_growth: false,
            segment_scales,
            food_wave: FoodWave::Idle,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn facing(&self) -> Facing {
        self.heading.facing()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn self_collision(&self) -> bool {
        let head = self.body[0];
        self.body.iter().skip(1).any(|&c| c == head)
    }

    /// Staged; takes effect at the next step. An exact reversal of the
    /// current heading is ignored.
    pub fn set_heading(&mut self, heading: Heading) {
        if heading != self.heading.opposite() {
            self.pending_heading = heading;
        }
    }

    pub fn step(&mut self) {
        self.heading = self.pending_heading;
        let new_head = self.heading.apply(self.body[0]);
        self.body.push_front(new_head);
        if self.pending_growth {
            self.segment_scales.push(MIN_SCALE);
            self.pending_growth = false;
        } else {
            self.body.pop_back();
        }
    }

    pub fn trigger_food_wave(&mut self) {
        self.food_wave = FoodWave::Running {
            position: 0,
            counter: 0,
        };
        self.segment_scales[0] = MAX_SCALE;
    }

    pub fn tick_food_wave(&mut self) {
        let (mut position, mut counter) = match self.food_wave {
            FoodWave::Running { position, counter } => (position, counter),
            FoodWave::Idle => return,
        };

        counter += 1;

        if counter >= ANIMATION_PERIOD {
            if position < self.segment_scales.len() {
                self.segment_scales[position] = MIN_SCALE;
            }
            position += 1;
            counter = 0;

            if position >= self.segment_scales.len() {
                self.food_wave = FoodWave::Idle;
                self.pending_growth = true;
                for s in &mut self.segment_scales {
                    *s = MIN_SCALE;
                }
                return;
            }
        }

        self.food_wave = FoodWave::Running { position, counter };

        // Current segment ramps up then down; the next one starts ramping up
        // while the current one is on its way down.
        let p = counter as f32 / ANIMATION_PERIOD as f32;
        self.segment_scales[position] = MIN_SCALE + (MAX_SCALE - MIN_SCALE) * (p * PI).sin();
        if position + 1 < self.segment_scales.len() {
            self.segment_scales[position + 1] =
                MIN_SCALE + (MAX_SCALE - MIN_SCALE) * ((p - 0.5) * PI).sin().max(0.0);
        }
    }
}
