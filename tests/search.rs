//! Search engine properties on scripted positions

use pylos::ai::{Search, SearchConfig, WeightedEvaluator, WIN};
use pylos::core::{Action, Board, GameState, Loc, Side, Simulator};

fn engine(config: SearchConfig) -> Search<WeightedEvaluator> {
    Search::new(config, WeightedEvaluator::default())
}

/// Five scripted ground placements, dark to move next
fn midgame(board: &mut Board) -> Simulator<'_> {
    let mut sim = Simulator::new(board);
    for (x, y) in [(0, 0), (2, 1), (1, 0), (3, 3), (0, 1)] {
        sim.apply(Action::Place {
            to: Loc::new(x, y, 0),
        });
    }
    assert_eq!(sim.active(), Side::Dark);
    sim
}

#[test]
fn test_pruning_preserves_the_minimax_value() {
    let mut board = Board::new();
    let mut sim = midgame(&mut board);
    let pruned = engine(SearchConfig::minimax(4)).decide(&mut sim).unwrap();
    let full = engine(SearchConfig {
        prune: false,
        ..SearchConfig::minimax(4)
    })
    .decide(&mut sim)
    .unwrap();
    assert_eq!(pruned.score, full.score);
    assert!(pruned.nodes <= full.nodes);
}

#[test]
fn test_table_and_symmetry_preserve_the_minimax_value() {
    let mut board = Board::new();
    let mut sim = midgame(&mut board);
    let plain = engine(SearchConfig::minimax(4)).decide(&mut sim).unwrap();
    let cached = engine(SearchConfig {
        table: true,
        symmetry: true,
        ..SearchConfig::minimax(4)
    })
    .decide(&mut sim)
    .unwrap();
    assert_eq!(plain.score, cached.score);
}

#[test]
fn test_blocks_an_imminent_square() {
    // light owns three corners of a square; dark to move must either
    // take the fourth cell or otherwise deny the removal gain
    let mut board = Board::new();
    let mut sim = midgame(&mut board);
    let result = engine(SearchConfig::minimax(4)).decide(&mut sim).unwrap();
    let blocking = Action::Place {
        to: Loc::new(1, 1, 0),
    };
    assert_eq!(result.action, blocking);
}

#[test]
fn test_completes_an_available_square() {
    let mut board = Board::new();
    for (x, y) in [(0, 0), (1, 0), (0, 1)] {
        board.occupy(Loc::new(x, y, 0), Side::Light);
        board.reserve_take(Side::Light);
    }
    let mut sim = Simulator::resume(&mut board, GameState::Move, Side::Light);
    let result = engine(SearchConfig::minimax(2)).decide(&mut sim).unwrap();
    assert_eq!(
        result.action,
        Action::Place {
            to: Loc::new(1, 1, 0)
        }
    );
}

#[test]
fn test_prefers_the_faster_win() {
    let mut board = Board::new();
    for y in 0..4 {
        for x in 0..4 {
            let side = if (x + y) % 2 == 0 { Side::Light } else { Side::Dark };
            board.occupy(Loc::new(x, y, 0), side);
            board.reserve_take(side);
        }
    }
    for y in 0..3 {
        for x in 0..3 {
            let side = if (x + y) % 2 == 0 { Side::Dark } else { Side::Light };
            board.occupy(Loc::new(x, y, 1), side);
            board.reserve_take(side);
        }
    }
    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        let side = if (x + y) % 2 == 0 { Side::Light } else { Side::Dark };
        board.occupy(Loc::new(x, y, 2), side);
        board.reserve_take(side);
    }
    let mut sim = Simulator::resume(&mut board, GameState::Move, Side::Light);
    let result = engine(SearchConfig::minimax(5)).decide(&mut sim).unwrap();
    // the apex wins immediately; a depth-5 search must not settle for a
    // win that arrives later
    assert_eq!(result.action, Action::Place { to: Loc::APEX });
    assert_eq!(result.score, WIN - 1);
}
