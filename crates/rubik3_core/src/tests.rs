use std::collections::HashSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::*;

const U: Turn = Turn::cw(Face::Up);

fn animate(puzzle: &mut Puzzle, turn: Turn) {
    assert!(puzzle.request_turn(turn));
    assert_eq!(puzzle.tick(QUARTER_TURN_DEGREES), Ok(Some(turn)));
    assert!(puzzle.is_idle());
}

fn committed(turns: &[Turn]) -> CubeState {
    let mut cube = CubeState::new();
    cube.commit_turns(turns.iter().copied());
    cube
}

#[test]
fn test_solved_cube() {
    let cube = CubeState::new();
    assert_eq!(cube.all_cubies().len(), CUBIE_COUNT);
    assert_eq!(cube.check_invariants(), Ok(()));
    assert!(cube.is_solved());
    assert_eq!(cube.color_counts(), [9; Color::COUNT]);

    let count_kind = |kind| cube.all_cubies().iter().filter(|c| c.kind() == kind).count();
    assert_eq!(count_kind(CubieKind::Center), 6);
    assert_eq!(count_kind(CubieKind::Edge), 12);
    assert_eq!(count_kind(CubieKind::Corner), 8);

    for cubie in cube.all_cubies() {
        assert_eq!(cubie.facet_count(), cubie.position.outer_faces().count());
        for (face, color) in cubie.colored_facets() {
            assert_eq!(color, face.solved_color());
            assert_eq!(color.home_face(), face);
        }
    }

    for face in Face::iter() {
        assert_eq!(cube.select_layer(face).count(), 9);
        assert!(cube.select_layer(face).all(|c| c.position[face.axis()] == face.sign()));
    }
}

#[test]
fn test_tables_agree_with_each_other() {
    for face in Face::iter() {
        for direction in [TurnDirection::CW, TurnDirection::CCW] {
            let turn = Turn::new(face, direction);
            for f in Face::iter() {
                assert_eq!(
                    turn.rotate_position(f.unit()),
                    turn.rotate_facet(f).unit(),
                    "{turn} moves {f:?}",
                );
            }
            assert_eq!(turn.rotate_facet(face), face);
            assert_eq!(turn.rotate_facet(face.opposite()), face.opposite());
        }
    }
}

#[test]
fn test_tables_agree_with_float_rotation() {
    use cgmath::Vector4;

    for face in Face::iter() {
        for direction in [TurnDirection::CW, TurnDirection::CCW] {
            let turn = Turn::new(face, direction);
            let m = turn.matrix(turn.full_angle());
            for pos in Position::iter() {
                let v = m * pos.floats().extend(1.0);
                let rounded = Position::new(Sign::round(v.x), Sign::round(v.y), Sign::round(v.z));
                assert_eq!(rounded, turn.rotate_position(pos), "{turn} moves {pos}");
            }
            // Partway through, the coordinate along the turn axis is unchanged.
            let corner = turn.matrix(turn.full_angle() / 2.0) * Vector4::new(1.0, 1.0, 1.0, 1.0);
            let v = [corner.x, corner.y, corner.z];
            assert!((v[face.axis().int()] - 1.0).abs() < 1e-6);
        }
    }
}

#[test]
fn test_clockwise_matches_notation() {
    // Standard cube notation, looking at each face from outside.
    assert_eq!(Turn::cw(Face::Up).rotate_facet(Face::Front), Face::Left);
    assert_eq!(Turn::cw(Face::Down).rotate_facet(Face::Front), Face::Right);
    assert_eq!(Turn::cw(Face::Right).rotate_facet(Face::Front), Face::Up);
    assert_eq!(Turn::cw(Face::Left).rotate_facet(Face::Front), Face::Down);
    assert_eq!(Turn::cw(Face::Front).rotate_facet(Face::Up), Face::Right);
    assert_eq!(Turn::cw(Face::Back).rotate_facet(Face::Up), Face::Left);
}

#[test]
fn test_order_4_round_trip() {
    for face in Face::iter() {
        for direction in [TurnDirection::CW, TurnDirection::CCW] {
            let turn = Turn::new(face, direction);
            let mut puzzle = Puzzle::new();
            let before = puzzle.cube().clone();
            for i in 1..=4 {
                animate(&mut puzzle, turn);
                assert_eq!(puzzle.cube() == &before, i == 4, "{turn} x{i}");
            }
            assert_eq!(puzzle.turn_count(), 4);
        }
    }
}

#[test]
fn test_inverse_is_noop() {
    // Start from a mixed-up state so that every facet is meaningful.
    let start = committed(&parse_turns("R U F' L D2 B").unwrap());
    for face in Face::iter() {
        let mut cube = start.clone();
        cube.commit_turn(Turn::cw(face));
        assert_ne!(cube, start);
        cube.commit_turn(Turn::ccw(face));
        assert_eq!(cube, start);

        cube.commit_turn(Turn::ccw(face));
        cube.commit_turn(Turn::cw(face));
        assert_eq!(cube, start);
    }
}

#[test]
fn test_each_turn_preserves_invariants() {
    for face in Face::iter() {
        for direction in [TurnDirection::CW, TurnDirection::CCW] {
            let mut cube = CubeState::new();
            cube.commit_turn(Turn::new(face, direction));
            assert_eq!(cube.check_invariants(), Ok(()));
            assert_eq!(cube.color_counts(), [9; Color::COUNT]);
            assert!(!cube.is_solved());
        }
    }
}

#[test]
fn test_up_turn_scenario() {
    let before = CubeState::new();
    let mut after = before.clone();
    after.commit_turn(U);

    for (old, new) in before.all_cubies().iter().zip(after.all_cubies()) {
        if old.position.y() == Sign::Pos {
            assert_eq!(new.position.y(), Sign::Pos);
            if old.kind() == CubieKind::Center {
                assert_eq!(new, old);
            } else {
                assert_ne!(new.position, old.position);
            }
            // The up-facing sticker stays on top.
            assert_eq!(new.facet(Face::Up), old.facet(Face::Up));
        } else {
            assert_eq!(new, old);
        }
    }

    let top_positions = |cube: &CubeState| -> HashSet<Position> {
        cube.select_layer(Face::Up).map(|c| c.position).collect()
    };
    assert_eq!(top_positions(&before), top_positions(&after));

    // Up-front edge moves to up-left.
    let up_front = Position::from_ints([0, 1, 1]).unwrap();
    let up_left = Position::from_ints([-1, 1, 0]).unwrap();
    let moved = after
        .all_cubies()
        .iter()
        .find(|c| c.kind() == CubieKind::Edge && c.facet(Face::Left) == Some(Color::White))
        .unwrap();
    assert_eq!(moved.position, up_left);
    assert_eq!(U.rotate_position(up_front), up_left);

    // The front face now shows the right face's color along the top row.
    for x in [-1, 0, 1] {
        let pos = Position::from_ints([x, 1, 1]).unwrap();
        assert_eq!(after.facet_color(pos, Face::Front), Some(Color::Green));
        let pos = Position::from_ints([x, 0, 1]).unwrap();
        assert_eq!(after.facet_color(pos, Face::Front), Some(Color::White));
    }
}

#[test]
fn test_sexy_move_has_order_6() {
    let sexy = parse_turns("R U R' U'").unwrap();
    let mut cube = CubeState::new();
    for i in 1..=6 {
        cube.commit_turns(sexy.iter().copied());
        assert_eq!(cube.is_solved(), i == 6, "(R U R' U') x{i}");
        assert_eq!(cube.check_invariants(), Ok(()));
    }
}

#[test]
fn test_turn_exclusivity() {
    let mut puzzle = Puzzle::new();
    assert!(puzzle.request_turn(U));
    puzzle.tick(30.0).unwrap();
    let state = puzzle.animator().state();

    assert!(!puzzle.request_turn(Turn::ccw(Face::Right)));
    assert!(!puzzle.request_turn(U));
    assert_eq!(puzzle.animator().state(), state);
    assert_eq!(
        state,
        AnimatorState::Turning {
            turn: U,
            elapsed: 30.0
        },
    );
}

#[test]
fn test_animation_completion() {
    for face in Face::iter() {
        let turn = Turn::cw(face);
        let mut puzzle = Puzzle::new();
        assert!(puzzle.request_turn(turn));
        assert!(!puzzle.is_idle());
        assert_eq!(puzzle.cube(), &CubeState::new());

        assert_eq!(puzzle.tick(90.0), Ok(Some(turn)));
        assert!(puzzle.is_idle());
        assert_eq!(puzzle.current_visual_angle(), 0.0);
        assert_eq!(puzzle.cube(), &committed(&[turn]));
        assert_eq!(puzzle.turn_count(), 1);

        // Ticking while idle does nothing.
        assert_eq!(puzzle.tick(90.0), Ok(None));
        assert_eq!(puzzle.cube(), &committed(&[turn]));
    }
}

#[test]
fn test_fixed_step_ticks() {
    let mut puzzle = Puzzle::new();
    puzzle.request_turn(U);
    for i in 1..18 {
        assert_eq!(puzzle.tick(5.0), Ok(None));
        assert_eq!(puzzle.current_visual_angle(), -5.0 * i as f32);
    }
    assert_eq!(puzzle.tick(5.0), Ok(Some(U)));
    assert!(puzzle.is_idle());
}

#[test]
fn test_overshoot_is_discarded() {
    let mut puzzle = Puzzle::new();
    puzzle.request_turn(U);
    assert_eq!(puzzle.tick(60.0), Ok(None));
    assert_eq!(puzzle.tick(60.0), Ok(Some(U)));
    assert_eq!(puzzle.animator().elapsed_degrees(), 0.0);

    // The next turn starts from zero.
    puzzle.request_turn(U);
    assert_eq!(puzzle.tick(10.0), Ok(None));
    assert_eq!(puzzle.animator().elapsed_degrees(), 10.0);
}

#[test]
fn test_visual_angle_sign() {
    let mut animator = TurnAnimator::new();
    let mut cube = CubeState::new();
    assert_eq!(animator.current_visual_angle(), 0.0);

    animator.request_turn(Turn::cw(Face::Front));
    animator.tick(30.0, &mut cube).unwrap();
    assert_eq!(animator.current_visual_angle(), -30.0);
    assert!((animator.eased_visual_angle(|t| t) + 30.0).abs() < 1e-4);
    assert_eq!(animator.eased_visual_angle(|_| 1.0), -90.0);
    animator.tick(60.0, &mut cube).unwrap();

    animator.request_turn(Turn::ccw(Face::Front));
    animator.tick(30.0, &mut cube).unwrap();
    assert_eq!(animator.current_visual_angle(), 30.0);
    assert!((animator.progress() - 1.0 / 3.0).abs() < 1e-6);
}

#[test]
fn test_invalid_tick_delta() {
    let mut puzzle = Puzzle::new();
    puzzle.request_turn(U);
    puzzle.tick(10.0).unwrap();
    for delta in [0.0, -5.0, f32::NAN, f32::INFINITY] {
        assert!(matches!(
            puzzle.tick(delta),
            Err(PuzzleError::InvalidArgument(_)),
        ));
    }
    assert_eq!(puzzle.animator().elapsed_degrees(), 10.0);
    assert_eq!(puzzle.cube(), &CubeState::new());
}

#[test]
fn test_raw_arguments() {
    assert_eq!(Turn::from_raw(3, 1), Ok(U));
    assert_eq!(Turn::from_raw(0, -1), Ok(Turn::ccw(Face::Left)));
    assert!(matches!(
        Turn::from_raw(6, 1),
        Err(PuzzleError::InvalidArgument(_)),
    ));
    assert!(matches!(
        Turn::from_raw(0, 0),
        Err(PuzzleError::InvalidArgument(_)),
    ));
    assert!(Color::try_from(6_u8).is_err());
    assert!(Position::from_ints([2, 0, 0]).is_err());
}

#[test]
fn test_notation() {
    let turns = parse_turns("R U R' U' F2").unwrap();
    assert_eq!(turns.len(), 6);
    assert_eq!(turns[2], Turn::ccw(Face::Right));
    assert_eq!(turns[4], turns[5]);
    let s = turns.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" ");
    assert_eq!(s, "R U R' U' F F");

    for bad in ["X", "r", "R''", "U'2", "2"] {
        assert!(parse_turns(bad).is_err(), "{bad:?} should not parse");
    }
    assert_eq!(parse_turns("   "), Ok(vec![]));
}

#[test]
fn test_render_cubies() {
    let mut puzzle = Puzzle::new();
    assert!(puzzle.render_cubies().all(|(_, t)| t.is_none()));

    puzzle.request_turn(Turn::ccw(Face::Back));
    puzzle.tick(45.0).unwrap();
    let rotating: Vec<_> = puzzle
        .render_cubies()
        .filter_map(|(c, t)| Some((c, t?)))
        .collect();
    assert_eq!(rotating.len(), 9);
    assert!(rotating.iter().all(|(c, t)| c.is_in_layer(Face::Back) && t.face == Face::Back));
}

#[test]
fn test_reset() {
    let mut puzzle = Puzzle::new();
    animate(&mut puzzle, U);
    puzzle.request_turn(Turn::cw(Face::Right));
    puzzle.tick(45.0).unwrap();

    // Reset is refused while turning, and the turn still completes.
    assert!(!puzzle.reset());
    assert_eq!(puzzle.current_turn(), Some(Turn::cw(Face::Right)));
    assert_eq!(puzzle.turn_count(), 1);
    assert_eq!(puzzle.tick(45.0), Ok(Some(Turn::cw(Face::Right))));
    assert_eq!(puzzle.turn_count(), 2);
    assert_eq!(puzzle.cube(), &committed(&[U, Turn::cw(Face::Right)]));

    assert!(puzzle.reset());
    assert!(puzzle.is_idle());
    assert_eq!(puzzle.turn_count(), 0);
    assert!(puzzle.cube().is_solved());
    assert_eq!(puzzle.tick(90.0), Ok(None));
    assert!(puzzle.cube().is_solved());
}

#[test]
fn test_shared_puzzle() {
    let shared = SharedPuzzle::new();
    let ticker = shared.clone();
    assert!(shared.request_turn(U));
    std::thread::spawn(move || {
        while !ticker.is_idle() {
            ticker.tick(5.0).unwrap();
        }
    })
    .join()
    .unwrap();
    assert!(shared.is_idle());
    assert_eq!(shared.read().cube(), &committed(&[U]));
    assert_eq!(shared.select_layer(Face::Up).len(), 9);
    assert_eq!(shared.all_cubies().len(), CUBIE_COUNT);
    assert!(shared.reset());
    assert!(shared.read().cube().is_solved());
}

proptest! {
    #[test]
    fn proptest_turns_preserve_invariants(turns in prop::collection::vec(any::<Turn>(), 0..40)) {
        let mut cube = CubeState::new();
        for &turn in &turns {
            cube.commit_turn(turn);
            prop_assert_eq!(cube.check_invariants(), Ok(()));
        }
        cube.commit_turns(turns.iter().rev().map(|t| t.rev()));
        prop_assert!(cube.is_solved());
        prop_assert_eq!(cube, CubeState::new());
    }

    #[test]
    fn proptest_animated_matches_committed(
        turns in prop::collection::vec(any::<Turn>(), 0..20),
        step in 1.0_f32..45.0,
    ) {
        let mut puzzle = Puzzle::new();
        for &turn in &turns {
            prop_assert!(puzzle.request_turn(turn));
            let mut finished = None;
            while finished.is_none() {
                prop_assert!(puzzle.current_visual_angle().abs() < QUARTER_TURN_DEGREES);
                finished = puzzle.tick(step).unwrap();
            }
            prop_assert_eq!(finished, Some(turn));
        }
        prop_assert_eq!(puzzle.cube(), &committed(&turns));
        prop_assert_eq!(puzzle.turn_count(), turns.len());
    }
}
