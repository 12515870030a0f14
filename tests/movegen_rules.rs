use draughtbot::board::{Board, Cell, Color};
use draughtbot::movegen::{complete_turns, legal_moves_for_color, legal_moves_for_piece, Move};
use pretty_assertions::assert_eq;

fn board(text: &str) -> Board { text.parse().expect("valid board") }

fn c(row: u8, col: u8) -> Cell { Cell::new(row, col) }

#[test]
fn start_position_white_has_seven_slides() {
    let set = legal_moves_for_color(&Board::start(), Color::White);
    assert!(!set.forced_capture);
    assert_eq!(set.len(), 7);
    assert!(set.moves.iter().all(|m| m.from.row == 5 && m.to.row == 4));
}

#[test]
fn man_slides_forward_only() {
    let b = board("
        ........
        ........
        .b......
        ........
        ...w....
        ........
        ........
        ........");
    let white = legal_moves_for_piece(&b, c(4, 3));
    assert_eq!(white.moves, vec![Move::slide(c(4, 3), c(3, 2)), Move::slide(c(4, 3), c(3, 4))]);
    let black = legal_moves_for_piece(&b, c(2, 1));
    assert_eq!(black.moves, vec![Move::slide(c(2, 1), c(3, 0)), Move::slide(c(2, 1), c(3, 2))]);
}

#[test]
fn man_captures_backwards() {
    let b = board("
        ........
        ........
        ........
        ........
        ...w....
        ..b.....
        ........
        ........");
    let set = legal_moves_for_piece(&b, c(4, 3));
    assert!(set.forced_capture);
    assert_eq!(set.moves, vec![Move::capture(c(4, 3), c(6, 1), c(5, 2))]);
}

#[test]
fn capture_is_mandatory_for_the_whole_side() {
    let b = board("
        ........
        ........
        ........
        ....b...
        ...w....
        w.......
        ........
        ........");
    let set = legal_moves_for_color(&b, Color::White);
    assert!(set.forced_capture);
    assert_eq!(set.moves, vec![Move::capture(c(4, 3), c(2, 5), c(3, 4))]);
}

#[test]
fn blocked_landing_square_gives_no_capture() {
    let b = board("
        ........
        ........
        .....b..
        ....b...
        ...w....
        ........
        ........
        ........");
    let set = legal_moves_for_piece(&b, c(4, 3));
    assert!(!set.forced_capture);
    assert_eq!(set.moves, vec![Move::slide(c(4, 3), c(3, 2))]);
}

#[test]
fn flying_king_lands_anywhere_beyond_the_jumped_piece() {
    let b = board("
        ........
        ........
        ........
        ........
        ...b....
        ........
        ........
        W.......");
    let set = legal_moves_for_piece(&b, c(7, 0));
    assert!(set.forced_capture);
    let landings: Vec<Cell> = set.moves.iter().map(|m| m.to).collect();
    assert_eq!(landings, vec![c(3, 4), c(2, 5), c(1, 6), c(0, 7)]);
    assert!(set.moves.iter().all(|m| m.captured == Some(c(4, 3))));
}

#[test]
fn king_cannot_jump_two_pieces_in_a_row() {
    let b = board("
        ........
        ........
        ........
        ....b...
        ...b....
        ........
        ........
        W.......");
    let set = legal_moves_for_piece(&b, c(7, 0));
    assert!(!set.forced_capture);
    assert_eq!(set.moves, vec![Move::slide(c(7, 0), c(6, 1)), Move::slide(c(7, 0), c(5, 2))]);
}

#[test]
fn friendly_piece_ends_the_king_ray() {
    let b = board("
        ........
        ........
        ........
        ........
        ...b....
        ..w.....
        ........
        W.......");
    let king = legal_moves_for_piece(&b, c(7, 0));
    assert_eq!(king.moves, vec![Move::slide(c(7, 0), c(6, 1))]);
    // the man can take, so the king's slide is not legal for the side
    let side = legal_moves_for_color(&b, Color::White);
    assert_eq!(side.moves, vec![Move::capture(c(5, 2), c(3, 4), c(4, 3))]);
}

#[test]
fn king_slides_along_all_four_diagonals() {
    let mut b = Board::empty();
    b.set(c(4, 3), Some(draughtbot::Piece::BlackKing));
    let set = legal_moves_for_piece(&b, c(4, 3));
    assert!(!set.forced_capture);
    assert_eq!(set.len(), 13);
}

#[test]
fn empty_cell_has_no_moves() {
    let set = legal_moves_for_piece(&Board::start(), c(4, 3));
    assert!(set.is_empty());
    assert!(!set.forced_capture);
}

#[test]
fn side_without_pieces_has_no_moves() {
    let b = board("
        ........
        ........
        ..b.....
        ........
        ........
        ........
        ........
        ........");
    assert!(legal_moves_for_color(&b, Color::White).is_empty());
}

#[test]
fn double_capture_is_one_complete_turn() {
    let b = board("
        ........
        ........
        ........
        ....b...
        ........
        ..b.....
        .w......
        ........");
    let turns = complete_turns(&b, Color::White);
    assert_eq!(
        turns,
        vec![vec![Move::capture(c(6, 1), c(4, 3), c(5, 2)), Move::capture(c(4, 3), c(2, 5), c(3, 4))]]
    );
}

#[test]
fn forked_captures_give_separate_turns() {
    let b = board("
        ........
        ........
        ........
        ........
        ........
        ..b.b...
        ...w....
        ........");
    let turns = complete_turns(&b, Color::White);
    assert_eq!(turns.len(), 2);
    assert!(turns.iter().all(|t| t.len() == 1 && t[0].is_capture()));
}
