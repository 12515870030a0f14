use draughtbot::board::{apply_move, Board, Cell, Color, Piece};
use draughtbot::movegen::{complete_turns, Move};

fn c(row: u8, col: u8) -> Cell { Cell::new(row, col) }

#[test]
fn slide_moves_the_piece() {
    let b = Board::start();
    let after = b.apply(Move::slide(c(5, 2), c(4, 3)));
    assert_eq!(after.get(c(5, 2)), None);
    assert_eq!(after.get(c(4, 3)), Some(Piece::WhiteMan));
    // input board is untouched
    assert_eq!(b, Board::start());
}

#[test]
fn capture_removes_jumped_piece() {
    let mut b = Board::empty();
    b.set(c(4, 3), Some(Piece::WhiteMan));
    b.set(c(3, 4), Some(Piece::BlackMan));
    let after = apply_move(&b, Move::capture(c(4, 3), c(2, 5), c(3, 4)));
    assert_eq!(after.get(c(3, 4)), None);
    assert_eq!(after.get(c(2, 5)), Some(Piece::WhiteMan));
    assert_eq!(after.count(Piece::BlackMan), 0);
}

#[test]
fn men_are_crowned_on_the_far_row() {
    let mut b = Board::empty();
    b.set(c(1, 2), Some(Piece::WhiteMan));
    b.set(c(6, 1), Some(Piece::BlackMan));
    let b = b.apply(Move::slide(c(1, 2), c(0, 1)));
    assert_eq!(b.get(c(0, 1)), Some(Piece::WhiteKing));
    let b = b.apply(Move::slide(c(6, 1), c(7, 0)));
    assert_eq!(b.get(c(7, 0)), Some(Piece::BlackKing));
    assert_eq!(b.to_codes()[0][1], 3);
    assert_eq!(b.to_codes()[7][0], 4);
}

#[test]
fn crowned_mid_chain_keeps_capturing_as_king() {
    // White jumps onto row 0, is crowned, then flies back over a second piece.
    let b: Board = "
        ........
        ..b.....
        ...w....
        ........
        .....b..
        ........
        ........
        ........"
        .parse()
        .unwrap();
    let turns = complete_turns(&b, Color::White);
    assert_eq!(turns.len(), 2, "{turns:?}");
    assert!(turns.iter().all(|t| t.len() == 2 && t[0].to == c(0, 1)));
    let after = b.apply_turn(&turns[0]);
    assert_eq!(after.count(Piece::BlackMan), 0);
    assert_eq!(after.count(Piece::WhiteKing), 1);
}

#[test]
#[should_panic]
fn applying_from_an_empty_cell_panics() {
    Board::empty().apply(Move::slide(c(5, 2), c(4, 3)));
}
