use draughtbot::board::{Board, Color};
use draughtbot::search::{score, ScoringMode, INF};

fn board(text: &str) -> Board { text.parse().expect("valid board") }

#[test]
fn startpos_is_balanced_in_both_modes() {
    let b = Board::start();
    for mode in [ScoringMode::Number, ScoringMode::NumberAndPotential] {
        for color in [Color::White, Color::Black] {
            let s = score(&b, color, mode);
            assert!((s - 1.0).abs() < 1e-9, "{mode:?} {color}: {s}");
        }
    }
}

#[test]
fn ratio_is_opponent_over_own() {
    let b = board("
        .b.b....
        ........
        ........
        ........
        ........
        ........
        ........
        w.......");
    assert_eq!(score(&b, Color::White, ScoringMode::Number), 2.0);
    assert_eq!(score(&b, Color::Black, ScoringMode::Number), 0.5);
}

#[test]
fn advanced_men_are_worth_more() {
    let back = board("
        .b......
        ........
        ........
        ........
        ........
        ........
        ........
        w.......");
    let front = board("
        .b......
        w.......
        ........
        ........
        ........
        ........
        ........
        ........");
    assert!(score(&front, Color::Black, ScoringMode::NumberAndPotential) > score(&back, Color::Black, ScoringMode::NumberAndPotential));
    assert_eq!(score(&front, Color::Black, ScoringMode::Number), score(&back, Color::Black, ScoringMode::Number));
}

#[test]
fn kings_weigh_four_or_five() {
    let b = board("
        ........
        ........
        ........
        ....W...
        ........
        ........
        .b......
        ........");
    // black man on row 6 has advanced six rows
    assert_eq!(score(&b, Color::Black, ScoringMode::Number), 4.0);
    let expected = 5.0 / 1.3;
    assert!((score(&b, Color::Black, ScoringMode::NumberAndPotential) - expected).abs() < 1e-12);
}

#[test]
fn missing_material_saturates() {
    let b = board("
        ........
        ........
        ........
        ........
        ........
        ........
        ........
        w.......");
    assert_eq!(score(&b, Color::Black, ScoringMode::Number), INF);
    assert_eq!(score(&b, Color::White, ScoringMode::Number), 0.0);
}

#[test]
fn color_swap_inverts_the_ratio() {
    let b = board("
        .b.b....
        ..B.....
        ........
        ....w...
        ........
        ..w.....
        .....W..
        ........");
    for mode in [ScoringMode::Number, ScoringMode::NumberAndPotential] {
        let w = score(&b, Color::White, mode);
        let k = score(&b, Color::Black, mode);
        assert!((w - 1.0 / k).abs() < 1e-12, "{mode:?}: {w} vs 1/{k}");
    }
}
