use macroquad::rand::srand;

use crate::config::{ANIMATION_PERIOD, FFP_SPAWN_INTERVAL_MS, INITIAL_SPEED};
use crate::game::grid::{Cell, Grid, Heading};
use crate::game::session::{Character, Session};
use crate::game::world::{Ffp, Food};
use crate::game::worm::{FoodWave, Worm};

fn grid(cols: i32, rows: i32) -> Grid {
    Grid {
        cols,
        rows,
        cell: 20.0,
    }
}

fn session_with(grid: Grid, worm: Worm, food: Food) -> Session {
    let mut session = Session::new(Character::InvestmentFund, grid, 0.0);
    session.worm = worm;
    session.food = food;
    session
}

const FAR_FOOD: Food = Food {
    cell: Cell { x: 30, y: 15 },
};

#[test]
fn eating_starts_the_wave_and_grows_by_one() {
    srand(1);
    let mut s = session_with(
        grid(40, 20),
        Worm::new_at(Cell::new(5, 5), Heading::Right),
        Food { cell: Cell::new(7, 5) },
    );

    s.tick();
    s.tick();
    assert_eq!(s.worm.head(), Cell::new(7, 5));
    assert_eq!(s.score, 1);
    assert!(matches!(s.worm.food_wave, FoodWave::Running { .. }));
    assert_eq!(s.worm.segment_scales.len(), s.worm.len());

    // Keep the regenerated food out of the way for the rest of the run.
    s.food = FAR_FOOD;

    for _ in 0..ANIMATION_PERIOD {
        s.tick();
        assert_eq!(s.worm.segment_scales.len(), s.worm.len());
    }
    assert_eq!(s.worm.food_wave, FoodWave::Idle);
    assert!(s.worm.pending_growth);
    assert_eq!(s.worm.len(), 1);

    s.tick();
    assert_eq!(s.worm.len(), 2);
    assert!(!s.worm.pending_growth);
    assert_eq!(s.worm.segment_scales.len(), 2);
    assert!(!s.game_over);
}

#[test]
fn reversal_command_does_not_turn_the_worm() {
    let mut s = session_with(
        grid(40, 20),
        Worm::from_cells(
            &[Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)],
            Heading::Right,
        ),
        FAR_FOOD,
    );

    s.worm.set_heading(Heading::Left);
    s.tick();

    assert_eq!(s.worm.head(), Cell::new(6, 5));
    assert!(!s.game_over);
}

#[test]
fn stepping_off_the_pitch_latches_game_over() {
    let mut s = session_with(
        grid(10, 10),
        Worm::new_at(Cell::new(9, 5), Heading::Right),
        Food { cell: Cell::new(0, 0) },
    );

    s.tick();
    assert!(s.game_over);
    assert_eq!(s.score, 0);
    assert_eq!(s.worm.head(), Cell::new(10, 5));

    // Latched: further ticks change nothing.
    for _ in 0..3 {
        s.tick();
    }
    assert_eq!(s.worm.head(), Cell::new(10, 5));
    assert_eq!(s.worm.len(), 1);
}

#[test]
fn running_into_the_body_latches_game_over() {
    let mut s = session_with(
        grid(40, 20),
        Worm::from_cells(
            &[
                Cell::new(5, 5),
                Cell::new(5, 4),
                Cell::new(4, 4),
                Cell::new(4, 5),
                Cell::new(3, 5),
            ],
            Heading::Down,
        ),
        FAR_FOOD,
    );

    s.worm.set_heading(Heading::Left);
    s.tick();

    assert_eq!(s.worm.head(), Cell::new(4, 5));
    assert!(s.game_over);
}

#[test]
fn moving_into_the_vacated_tail_is_safe() {
    let mut s = session_with(
        grid(40, 20),
        Worm::from_cells(
            &[
                Cell::new(5, 5),
                Cell::new(5, 4),
                Cell::new(4, 4),
                Cell::new(4, 5),
            ],
            Heading::Down,
        ),
        FAR_FOOD,
    );

    // The tail cell is freed by the same step that reaches it.
    s.worm.set_heading(Heading::Left);
    s.tick();

    assert_eq!(s.worm.head(), Cell::new(4, 5));
    assert!(!s.game_over);
}

#[test]
fn speed_ramps_every_five_food() {
    srand(2);
    let mut s = session_with(
        grid(40, 20),
        Worm::new_at(Cell::new(5, 5), Heading::Right),
        FAR_FOOD,
    );
    assert_eq!(s.speed, INITIAL_SPEED);

    for _ in 0..5 {
        let head = s.worm.head();
        s.food = Food {
            cell: Cell::new(head.x + 1, head.y),
        };
        s.tick();
    }
    assert_eq!(s.score, 5);
    assert!((s.speed - 55.0).abs() < 1e-3);

    for _ in 0..5 {
        let head = s.worm.head();
        s.food = Food {
            cell: Cell::new(head.x + 1, head.y),
        };
        s.tick();
    }
    assert_eq!(s.score, 10);
    assert!((s.speed - 60.5).abs() < 1e-3);
}

#[test]
fn ffp_pickup_halves_the_score() {
    let mut s = session_with(
        grid(40, 20),
        Worm::new_at(Cell::new(2, 3), Heading::Right),
        FAR_FOOD,
    );
    s.score = 7;
    s.ffp = Some(Ffp { cell: Cell::new(3, 3) });

    s.tick();

    assert_eq!(s.score, 3);
    assert_eq!(s.money(), 15);
    assert!(s.ffp.is_none());
    assert!(!s.game_over);
}

#[test]
fn ffp_spawns_only_after_the_interval_and_off_occupied_cells() {
    srand(3);
    let mut s = session_with(
        grid(40, 20),
        Worm::new_at(Cell::new(5, 5), Heading::Right),
        Food { cell: Cell::new(7, 5) },
    );

    s.maybe_spawn_ffp(FFP_SPAWN_INTERVAL_MS);
    assert!(s.ffp.is_none());

    s.maybe_spawn_ffp(FFP_SPAWN_INTERVAL_MS + 1.0);
    let ffp = s.ffp.expect("card should spawn after the interval");
    assert!(!s.worm.occupies(ffp.cell));
    assert!(!s.food.covers(ffp.cell));
}

#[test]
fn straight_run_translates_the_body() {
    let cells = [
        Cell::new(5, 5),
        Cell::new(4, 5),
        Cell::new(3, 5),
        Cell::new(2, 5),
    ];
    let mut s = session_with(grid(40, 20), Worm::from_cells(&cells, Heading::Right), FAR_FOOD);

    let len = cells.len();
    for _ in 0..len {
        let before: Vec<Cell> = s.worm.body.iter().copied().collect();
        s.tick();
        for i in 1..len {
            assert_eq!(s.worm.body[i], before[i - 1]);
        }
    }
    for (i, c) in cells.iter().enumerate() {
        assert_eq!(s.worm.body[i], c.offset(len as i32, 0));
    }
    assert!(!s.game_over);
}
