//! Randomized invariants over whole input sequences

use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use pocket_pong::Settings;
use pocket_pong::consts::SIM_DT;
use pocket_pong::sim::launch::{LAUNCH_ANGLE_MAX, LAUNCH_ANGLE_MIN};
use pocket_pong::sim::{
    Arena, GameState, PaddleInput, Phase, Player, TickInput, launch_vector, tick,
};

fn paddle_input() -> impl Strategy<Value = Option<PaddleInput>> {
    prop_oneof![
        Just(None),
        Just(Some(PaddleInput::DragBegan)),
        (-600.0f32..600.0).prop_map(|translation| Some(PaddleInput::DragMoved { translation })),
        (-0.5f32..1.5).prop_map(|t| Some(PaddleInput::Normalized(t))),
        Just(Some(PaddleInput::Normalized(f32::NAN))),
        Just(Some(PaddleInput::DragMoved {
            translation: f32::NAN
        })),
        Just(Some(PaddleInput::Normalized(f32::INFINITY))),
    ]
}

fn tick_input() -> impl Strategy<Value = TickInput> {
    (paddle_input(), any::<bool>(), any::<bool>(), prop::bool::weighted(0.01)).prop_map(
        |(paddle, launch, idle_mode, new_match)| TickInput {
            paddle,
            launch,
            new_match,
            idle_mode,
        },
    )
}

/// A quick match so goals and resets actually happen within a test case
fn fast_settings() -> Settings {
    Settings {
        win_score: 2,
        launch_speed: 900.0,
        serve_delay_secs: 0.05,
        result_delay_secs: 0.1,
        ..Default::default()
    }
}

fn paddle_in_bounds(arena: &Arena, state: &GameState, player: Player) -> bool {
    let paddle = state.paddle(player);
    paddle.left() >= 0.0 && paddle.right() <= arena.width() + 0.001
}

proptest! {
    #[test]
    fn ball_and_paddles_stay_in_arena(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..600),
    ) {
        let mut state = GameState::with_settings(&fast_settings(), seed).unwrap();
        let arena = state.arena;
        for input in &inputs {
            tick(&mut state, input, SIM_DT);
            prop_assert!(arena.contains_body(&state.bodies.ball), "ball escaped: {:?}", state.bodies.ball);
            prop_assert!(state.bodies.ball.pos.is_finite());
            prop_assert!(paddle_in_bounds(&arena, &state, Player::User));
            prop_assert!(paddle_in_bounds(&arena, &state, Player::Enemy));
            prop_assert!(state.bodies.ball.speed() <= state.physics.max_ball_speed + 0.01);
        }
    }

    #[test]
    fn scores_never_pass_win_score(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..2000),
    ) {
        let mut state = GameState::with_settings(&fast_settings(), seed).unwrap();
        let win = state.match_state.win_score;
        for input in &inputs {
            tick(&mut state, input, SIM_DT);
            let m = &state.match_state;
            prop_assert!(m.user_score <= win && m.enemy_score <= win);
            let someone_won = m.user_score == win || m.enemy_score == win;
            prop_assert_eq!(m.phase == Phase::Finished, someone_won);
            prop_assert_eq!(m.winner.is_some(), someone_won);
            if m.phase != Phase::InPlay {
                prop_assert_eq!(state.bodies.ball.vel, Vec2::ZERO);
            }
        }
    }

    #[test]
    fn launch_has_fixed_speed_and_bounded_angle(seed in any::<u64>(), amplitude in 1.0f32..2000.0) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let v = launch_vector(&mut rng, amplitude);
        prop_assert!((v.length() - amplitude).abs() <= amplitude * 1e-4);

        let angle = (v.y.abs()).atan2(v.x.abs());
        prop_assert!(angle >= LAUNCH_ANGLE_MIN - 1e-4);
        prop_assert!(angle <= LAUNCH_ANGLE_MAX + 1e-4);
    }

    #[test]
    fn same_seed_same_game(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..300),
    ) {
        let mut a = GameState::new(seed);
        let mut b = GameState::new(seed);
        for input in &inputs {
            prop_assert_eq!(tick(&mut a, input, SIM_DT), tick(&mut b, input, SIM_DT));
        }
        prop_assert_eq!(a.bodies, b.bodies);
    }
}
