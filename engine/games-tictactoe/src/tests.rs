use super::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[test]
fn test_initial_state() {
    let state = State::new();
    assert_eq!(state.board(), &[0; 9]);
    assert_eq!(state.player_to_move(), Player::X);
    assert_eq!(state.winner(), None);
    assert!(!state.is_terminal());
}

#[test]
fn test_legal_moves() {
    let state = State::new();
    assert_eq!(state.legal_moves(), (0..9).collect::<Vec<_>>());

    // After one move
    let state = state.apply(4).unwrap(); // Center
    let legal = state.legal_moves();
    assert_eq!(legal.len(), 8);
    assert!(!legal.contains(&4));
}

#[test]
fn test_apply_alternates_turn() {
    let state = State::new();
    let next = state.apply(4).unwrap(); // X places in center

    assert_eq!(next.board()[4], 1);
    assert_eq!(next.player_to_move(), Player::O);
    assert!(!next.is_terminal());

    // The original state is untouched
    assert_eq!(state.board()[4], 0);
    assert_eq!(state.player_to_move(), Player::X);
}

#[test]
fn test_illegal_moves_are_rejected() {
    let state = State::new().apply(4).unwrap();

    // Occupied cell
    assert_eq!(
        state.apply(4),
        Err(GameError::IllegalMove("4".to_string()))
    );

    // Out of range
    assert!(state.apply(9).is_err());
    assert!(state.apply(255).is_err());
}

#[test]
fn test_no_moves_after_game_over() {
    // X has won the top row
    let state = State::from_board([1, 1, 1, -1, -1, 0, 0, 0, 0], Player::O);

    assert_eq!(state.winner(), Some(Player::X));
    assert!(state.is_terminal());
    assert!(state.legal_moves().is_empty());
    assert!(state.apply(5).is_err());
}

#[test]
fn test_winning_game() {
    let mut state = State::new();

    // X wins with the top row
    for mv in [0, 3, 1, 4, 2] {
        state = state.apply(mv).unwrap();
    }

    assert_eq!(state.winner(), Some(Player::X));
    assert!(state.is_terminal());
    assert!(state.legal_moves().is_empty());
}

/// All 8 winning lines should be detected for either player
#[test]
fn test_all_winning_lines() {
    let all_lines: [[usize; 3]; 8] = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];

    for (line_idx, line) in all_lines.iter().enumerate() {
        let mut board_x = [0i8; 9];
        let mut board_o = [0i8; 9];
        for &pos in line {
            board_x[pos] = 1;
            board_o[pos] = -1;
        }

        let state_x = State::from_board(board_x, Player::O);
        assert_eq!(
            state_x.winner(),
            Some(Player::X),
            "X should win on line {}: {:?}",
            line_idx,
            line
        );

        let state_o = State::from_board(board_o, Player::X);
        assert_eq!(
            state_o.winner(),
            Some(Player::O),
            "O should win on line {}: {:?}",
            line_idx,
            line
        );
    }
}

/// Draw detection: full board with no winner
#[test]
fn test_draw_detection() {
    let draw_boards = [
        [1, -1, 1, 1, -1, -1, -1, 1, 1],
        [1, -1, 1, -1, 1, 1, -1, 1, -1],
        [-1, 1, -1, -1, 1, 1, 1, -1, -1],
    ];

    for board in &draw_boards {
        let state = State::from_board(*board, Player::X);
        assert_eq!(state.winner(), None, "no winner for board {:?}", board);
        assert!(state.is_terminal());
        assert!(state.legal_moves().is_empty());
        assert_eq!(state.result_from_perspective(Player::X), Ok(0.5));
        assert_eq!(state.result_from_perspective(Player::O), Ok(0.5));
    }
}

#[test]
fn test_result_from_perspective() {
    // X won the left column
    let state = State::from_board([1, -1, 0, 1, -1, 0, 1, 0, 0], Player::O);

    assert_eq!(state.result_from_perspective(Player::X), Ok(1.0));
    assert_eq!(state.result_from_perspective(Player::O), Ok(0.0));
}

#[test]
fn test_result_rejected_on_non_terminal_state() {
    let state = State::new();
    assert_eq!(
        state.result_from_perspective(Player::X),
        Err(GameError::InvalidQuery)
    );

    let state = state.apply(0).unwrap();
    assert_eq!(
        state.result_from_perspective(Player::O),
        Err(GameError::InvalidQuery)
    );
}

#[test]
fn test_display_rendering() {
    let state = State::from_board([1, 0, -1, 0, 1, 0, 0, 0, -1], Player::X);
    let rendered = state.to_string();

    assert!(rendered.contains("X |   | O"));
    assert!(rendered.contains("  | X |  "));
    assert!(rendered.contains("  |   | O"));
}

/// Play many random games and verify the contract invariants hold
#[test]
fn test_random_games_invariants() {
    for seed in 0..50 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut state = State::new();
        let mut move_count = 0;

        while !state.is_terminal() {
            let legal = state.legal_moves();
            assert!(
                !legal.is_empty(),
                "non-terminal state must have legal moves (seed={}, moves={})",
                seed,
                move_count
            );

            let prev_player = state.player_to_move();
            let mv = legal[rng.gen_range(0..legal.len())];
            state = state.apply(mv).unwrap();
            move_count += 1;

            if !state.is_terminal() {
                assert_eq!(
                    state.player_to_move(),
                    prev_player.opponent(),
                    "turn should alternate (seed={})",
                    seed
                );
            }
        }

        // Game finishes within 9 moves and yields a valid result
        assert!(move_count <= 9, "game too long (seed={})", seed);
        let result = state.result_from_perspective(Player::X).unwrap();
        assert!(
            result == 0.0 || result == 0.5 || result == 1.0,
            "unexpected result {} (seed={})",
            result,
            seed
        );

        // The two perspectives are complementary
        let other = state.result_from_perspective(Player::O).unwrap();
        assert_eq!(result + other, 1.0, "results must sum to 1 (seed={})", seed);
    }
}
