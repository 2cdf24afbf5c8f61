//! Engine and search benchmarks using Criterion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use othello_search::{
    AlphaBetaAgent, Game, MctsAgent, MctsConfig, MinimaxAgent, Player, SearchConfig, State,
};

fn midgame() -> State {
    let mut game = Game::new();
    let line = ["f5", "d6", "c3", "d3", "c4", "f4", "f6", "f3", "e6", "e7"];
    for (i, name) in line.iter().enumerate() {
        let player = if i % 2 == 0 { Player::Dark } else { Player::Light };
        game.play(player, Some(name.parse().unwrap())).unwrap();
    }
    *game.state()
}

fn bench_legal_actions(c: &mut Criterion) {
    let state = midgame();

    c.bench_function("legal_actions_midgame", |b| {
        b.iter(|| black_box(state.legal_actions(Player::Dark).count()))
    });
}

fn bench_successors(c: &mut Criterion) {
    let state = midgame();

    c.bench_function("successors_midgame", |b| {
        b.iter(|| black_box(state.successors(Player::Dark).unwrap().len()))
    });
}

fn bench_score(c: &mut Criterion) {
    let state = midgame();

    c.bench_function("score_midgame", |b| {
        b.iter(|| black_box(state.score(Player::Dark)))
    });
}

fn bench_minimax(c: &mut Criterion) {
    let state = midgame();
    let mut agent = MinimaxAgent::new(Player::Dark, SearchConfig::minimax());

    c.bench_function("minimax_depth_2_midgame", |b| {
        b.iter(|| black_box(agent.search(&state).unwrap()))
    });
}

fn bench_alphabeta(c: &mut Criterion) {
    let state = midgame();
    let agent = AlphaBetaAgent::new(Player::Dark, SearchConfig::alphabeta().with_depth(2));

    c.bench_function("alphabeta_depth_2_midgame", |b| {
        b.iter(|| black_box(agent.search(&state).unwrap()))
    });
}

fn bench_mcts(c: &mut Criterion) {
    let state = State::initial();

    c.bench_function("mcts_100_iterations_opening", |b| {
        b.iter(|| {
            let mut agent = MctsAgent::new(Player::Dark, MctsConfig::default());
            black_box(agent.search(&state).unwrap())
        })
    });
}

criterion_group!(
    benches,
    bench_legal_actions,
    bench_successors,
    bench_score,
    bench_minimax,
    bench_alphabeta,
    bench_mcts,
);
criterion_main!(benches);
