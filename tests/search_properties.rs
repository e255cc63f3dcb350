//! 搜索引擎整体性质测试

use divide_game_ai::{evaluate, AIEngine, Algorithm, GameState, Move, Side, WIN_SCORE};

fn non_terminal_states(limit: u64) -> impl Iterator<Item = GameState> {
    (11..=limit).flat_map(|n| {
        [Side::Player, Side::Computer]
            .into_iter()
            .filter_map(move |side| GameState::new(n, side).ok())
            .filter(|s| !s.is_terminal())
    })
}

#[test]
fn alpha_beta_agrees_with_minimax() {
    let mut pruned = 0;
    for state in non_terminal_states(5000) {
        for depth in [1, 3, 6] {
            let mut mm = AIEngine::minimax(depth);
            let mut ab = AIEngine::alpha_beta(depth);
            let mm_move = mm.select_best_move(&state);
            let ab_move = ab.select_best_move(&state);

            assert_eq!(mm_move, ab_move, "move differs at [{}] depth {}", state, depth);
            assert_eq!(mm.last_score(), ab.last_score(), "score differs at [{}]", state);
            assert!(
                ab.last_nodes() <= mm.last_nodes(),
                "alpha-beta visited more nodes at [{}] depth {}",
                state,
                depth
            );
            if ab.last_nodes() < mm.last_nodes() {
                pruned += 1;
            }
        }
    }
    assert!(pruned > 0, "expected at least one cutoff");
}

#[test]
fn explicit_search_matches_configured_engine() {
    let state = GameState::new(10368, Side::Computer).unwrap();
    let mut configured = AIEngine::alpha_beta(8);
    let mut explicit = AIEngine::default();

    let a = configured.select_best_move(&state);
    let b = explicit.search(&state, 8, Algorithm::AlphaBeta);
    assert_eq!(a, b);
    assert_eq!(a, Some(Move::DIVIDE_BY_TWO));
    assert_eq!(configured.last_nodes(), 362);
    assert_eq!(explicit.last_nodes(), 362);

    explicit.search(&state, 8, Algorithm::Minimax);
    assert_eq!(explicit.last_nodes(), 379);
    assert_eq!(explicit.total_nodes(), 362 + 379);
    assert_eq!(explicit.moves_played(), 2);
}

#[test]
fn selected_move_is_always_legal() {
    for state in non_terminal_states(600) {
        let mut ai = AIEngine::alpha_beta(5);
        let mv = ai.select_best_move(&state).expect("non-terminal state has a move");
        assert!(state.is_move_legal(mv.divisor()));
    }
}

#[test]
fn search_leaves_input_untouched() {
    let state = GameState::from_parts(19440, 4, 7, Side::Player).unwrap();
    let copy = state;
    let mut ai = AIEngine::minimax(6);
    ai.select_best_move(&state);
    ai.score_moves(&state);
    assert_eq!(state, copy);
}

#[test]
fn terminal_evaluation_signs() {
    for p in 0..20u32 {
        for c in 0..20u32 {
            let state = GameState::from_parts(8, p, c, Side::Player).unwrap();
            let score = evaluate(&state);
            let diff = c as i32 - p as i32;
            if c > p {
                assert_eq!(score, WIN_SCORE + diff);
                assert!(score > 0);
            } else if p > c {
                assert_eq!(score, -WIN_SCORE + diff);
                assert!(score < 0);
            } else {
                assert_eq!(score, 0);
            }
        }
    }
}
