use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_ztype::core::{GameState, Word, WordCollection, WordGenerator};
use tui_ztype::term::{GameView, Viewport};
use tui_ztype::types::GameConfig;

fn crowded_state() -> GameState {
    let words = (0..20).map(|i| Word::inactive("keyboard", 60 + i * 20, 10 + i * 25));
    GameState::new(12345, GameConfig::default()).with_words(WordCollection::from_words(words))
}

fn bench_tick(c: &mut Criterion) {
    let state = crowded_state();

    c.bench_function("tick_20_words", |b| {
        b.iter(|| black_box(state.clone()).on_tick())
    });
}

fn bench_keystroke(c: &mut Criterion) {
    let state = crowded_state();

    c.bench_function("activate_and_reduce", |b| {
        b.iter(|| black_box(state.clone()).on_letter(black_box('k')))
    });
}

fn bench_next_word(c: &mut Criterion) {
    let mut gen = WordGenerator::new(12345);

    c.bench_function("next_word_8", |b| b.iter(|| gen.next_word(black_box(8))));
}

fn bench_render(c: &mut Criterion) {
    let state = crowded_state();
    let view = GameView::default();

    c.bench_function("render_80x24", |b| {
        b.iter(|| view.render(&state, Viewport::new(80, 24)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_keystroke,
    bench_next_word,
    bench_render
);
criterion_main!(benches);
