//! Randomized apply/undo exercises over full games

use rand::prelude::*;

use pylos::core::{Action, Board, GameState, Loc, Side, Simulator, Undo, SPHERES_PER_SIDE};
use pylos::utils::make_rng;

fn snapshot(sim: &Simulator) -> (u64, u8, u8, GameState, Side, Option<Side>) {
    (
        sim.key(),
        sim.board().reserve(Side::Light),
        sim.board().reserve(Side::Dark),
        sim.state(),
        sim.active(),
        sim.winner(),
    )
}

fn check_invariants(sim: &Simulator) {
    for side in Side::all() {
        assert_eq!(
            sim.board().reserve(side) + sim.board().on_board(side),
            SPHERES_PER_SIDE,
            "sphere conservation broken for {side:?}"
        );
    }
    for loc in Loc::all() {
        let supported = loc.is_ground()
            || loc.below().iter().all(|&s| sim.board().get(s).is_some());
        assert_eq!(
            sim.board().is_usable(loc),
            sim.board().get(loc).is_none() && supported,
            "usability mismatch at {loc}"
        );
    }
    if sim.state() == GameState::Completed {
        assert!(sim.winner().is_some());
    } else {
        assert!(sim.winner().is_none());
    }
}

#[test]
fn test_random_walk_unwinds_to_start() {
    let mut rng = make_rng();
    for _ in 0..30 {
        let mut board = Board::new();
        let mut sim = Simulator::new(&mut board);
        let start = snapshot(&sim);

        let mut trail: Vec<(Action, Undo)> = Vec::new();
        let mut snapshots = vec![start];
        let mut actions = Vec::new();
        for _ in 0..120 {
            if sim.is_terminal() {
                break;
            }
            sim.legal_actions(&mut actions);
            let action = *actions.choose(&mut rng).unwrap();
            trail.push((action, sim.apply(action)));
            check_invariants(&sim);
            snapshots.push(snapshot(&sim));
        }

        snapshots.pop();
        while let Some((action, undo)) = trail.pop() {
            sim.undo(action, undo);
            assert_eq!(snapshot(&sim), snapshots.pop().unwrap());
            check_invariants(&sim);
        }
        assert_eq!(snapshot(&sim), start);
        assert_eq!(board, Board::new());
    }
}

#[test]
fn test_random_games_reach_terminal_states() {
    let mut rng = make_rng();
    let mut actions = Vec::new();
    let mut wins = 0;
    for _ in 0..20 {
        let mut board = Board::new();
        let mut sim = Simulator::new(&mut board);
        for _ in 0..400 {
            if sim.is_terminal() {
                break;
            }
            sim.legal_actions(&mut actions);
            let action = *actions.choose(&mut rng).unwrap();
            sim.apply(action);
        }
        if sim.state() == GameState::Completed {
            wins += 1;
            assert!(sim.winner().is_some());
        }
    }
    // random play resolves the vast majority of games within 400 plies
    assert!(wins > 0);
}
