use super::*;

#[test]
fn test_empty_board_defaults() {
    let board = Board::new();
    assert_eq!(board.height(), 7);
    assert_eq!(board.width(), 7);
    assert_eq!(board.total_cells(), 49);
    assert_eq!(board.blank_count(), 49);
    assert_eq!(board.active_player(), Player::One);
    assert_eq!(board.player_location(Player::One), None);
    assert_eq!(board.player_location(Player::Two), None);
}

#[test]
fn test_opening_moves_cover_all_blank_cells() {
    let board = Board::new();
    let moves = board.legal_moves();
    assert_eq!(moves.len(), 49);
    // Row-major order
    assert_eq!(moves[0], Move::new(0, 0));
    assert_eq!(moves[48], Move::new(6, 6));
}

#[test]
fn test_apply_does_not_mutate() {
    let board = Board::new();
    let hash_before = board.canonical_hash();

    let next = board.apply(Move::new(3, 3));

    assert_eq!(board.blank_count(), 49);
    assert_eq!(board.canonical_hash(), hash_before);
    assert_eq!(next.blank_count(), 48);
    assert_ne!(next.canonical_hash(), hash_before);
}

#[test]
fn test_apply_switches_player_and_blocks_cell() {
    let board = Board::new();
    let next = board.apply(Move::new(3, 3));

    assert_eq!(next.active_player(), Player::Two);
    assert_eq!(next.player_location(Player::One), Some(Move::new(3, 3)));
    assert!(!next.is_blank(3, 3));
}

#[test]
fn test_knight_moves_from_center() {
    let board = Board::new()
        .apply(Move::new(3, 3)) // One
        .apply(Move::new(0, 0)); // Two

    // One is at (3,3); all eight knight destinations are blank
    let moves = board.legal_moves();
    let expected = vec![
        Move::new(1, 2),
        Move::new(1, 4),
        Move::new(2, 1),
        Move::new(2, 5),
        Move::new(4, 1),
        Move::new(4, 5),
        Move::new(5, 2),
        Move::new(5, 4),
    ];
    assert_eq!(moves, expected);
}

#[test]
fn test_knight_moves_clipped_at_corner() {
    let board = Board::new()
        .apply(Move::new(0, 0)) // One
        .apply(Move::new(6, 6)); // Two

    let moves = board.legal_moves();
    assert_eq!(moves, vec![Move::new(1, 2), Move::new(2, 1)]);
}

#[test]
fn test_blocked_cells_stay_blocked() {
    let board = Board::new()
        .apply(Move::new(3, 3)) // One
        .apply(Move::new(1, 2)) // Two takes one of One's targets
        .apply(Move::new(1, 4)); // One moves away

    // (3,3) and (1,2) remain off-limits for both players
    assert!(!board.is_blank(3, 3));
    assert!(!board.is_blank(1, 2));
    let two_moves = board.legal_moves_for(Player::Two);
    assert!(!two_moves.contains(&Move::new(3, 3)));
    assert!(two_moves.contains(&Move::new(0, 0)));
}

#[test]
fn test_canonical_hash_path_independent() {
    // Same final position reached through different openings for Two
    let a = Board::new().apply(Move::new(3, 3)).apply(Move::new(0, 0));
    let b = Board::new().apply(Move::new(3, 3)).apply(Move::new(0, 0));
    assert_eq!(a.canonical_hash(), b.canonical_hash());

    let c = Board::new().apply(Move::new(3, 3)).apply(Move::new(0, 1));
    assert_ne!(a.canonical_hash(), c.canonical_hash());
}

#[test]
fn test_hash_distinguishes_side_to_move() {
    let base = Board::new();
    let after = base.apply(Move::new(3, 3));
    // Different occupancy AND different side to move
    assert_ne!(base.canonical_hash(), after.canonical_hash());
}

#[test]
fn test_occupancy_grid_snapshot() {
    let board = Board::new()
        .apply(Move::new(0, 1)) // One at index 1
        .apply(Move::new(2, 0)); // Two at index 14

    let grid = board.occupancy_grid();
    assert_eq!(grid.height, 7);
    assert_eq!(grid.width, 7);
    assert_eq!(grid.cells[1], 1);
    assert_eq!(grid.cells[14], 1);
    assert_eq!(grid.cells.iter().sum::<u64>(), 2);
    // Locations stored as index + 1, active marker for One
    assert_eq!(grid.meta, [2, 15, 1]);
}

#[test]
fn test_largest_supported_dimensions() {
    let board = Board::with_size(MAX_DIMENSION, MAX_DIMENSION);
    assert_eq!(board.total_cells(), 126 * 126);
    assert_eq!(board.legal_moves().len(), 126 * 126);

    // Knight generation at the far corner stays in coordinate range
    let board = board.apply(Move::new(125, 125)).apply(Move::new(0, 0));
    let moves = board.legal_moves();
    assert_eq!(moves, vec![Move::new(123, 124), Move::new(124, 123)]);
    for mv in &moves {
        assert!(board.is_blank(mv.row, mv.col));
    }
}

#[test]
#[should_panic(expected = "board dimensions")]
fn test_oversized_board_rejected() {
    let _ = Board::with_size(150, 7);
}

#[test]
#[should_panic(expected = "board dimensions")]
fn test_zero_dimension_rejected() {
    let _ = Board::with_size(7, 0);
}

#[test]
fn test_small_board_sizes() {
    let board = Board::with_size(3, 5);
    assert_eq!(board.total_cells(), 15);
    assert_eq!(board.legal_moves().len(), 15);

    let next = board.apply(Move::new(2, 4));
    assert_eq!(next.blank_count(), 14);
}
