use criterion::{black_box, criterion_group, criterion_main, Criterion};
use draughtbot::board::{Board, Color};
use draughtbot::movegen::SeedPolicy;
use draughtbot::search::{Optimization, SearchParams, Searcher};

fn params(depth: u32, optimization: Optimization) -> SearchParams {
    SearchParams { max_depth: depth, optimization, seed: SeedPolicy::Fixed(7), ..SearchParams::default() }
}

fn bench_search(c: &mut Criterion) {
    let b = Board::start();
    for (name, opt) in [("O0", Optimization::None), ("O1", Optimization::AlphaBeta), ("O2", Optimization::AlphaBetaWithEqualCutoff)] {
        c.bench_function(&format!("search_depth_4_startpos_{name}"), |ben| {
            ben.iter(|| {
                let mut s = Searcher::new(params(4, opt));
                let r = s.choose_turn(black_box(&b), Color::White);
                black_box(r.nodes)
            })
        });
    }
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
