use tui_ztype::core::{GameState, Word, WordCollection};
use tui_ztype::term::{ink_style, GameView, Viewport};
use tui_ztype::types::{Ink, GAME_OVER_MESSAGE};

fn screen_text(fb: &tui_ztype::term::FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::default();
    let fb = GameView::default().render(&state, Viewport::new(62, 92));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(61, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 91).unwrap().ch, '└');
    assert_eq!(fb.get(61, 91).unwrap().ch, '┘');
}

#[test]
fn term_view_places_words_in_world_position() {
    // 60x90 interior maps 600x900 world units at 10 units per cell.
    let words = WordCollection::from_words([
        Word::inactive("fall", 300, 100),
        Word::active("type", 100, 200),
    ]);
    let state = GameState::default().with_words(words);
    let fb = GameView::default().render(&state, Viewport::new(62, 92));

    // "fall" centered on column 31, row 11.
    assert_eq!(fb.row_text(11), format!("│{:28}fall{:28}│", "", ""));
    assert_eq!(fb.get(29, 11).unwrap().style, ink_style(Ink::Inactive));
    // "type" centered on column 11, row 21.
    assert_eq!(fb.get(9, 21).unwrap().ch, 't');
    assert_eq!(fb.get(9, 21).unwrap().style, ink_style(Ink::Active));
}

#[test]
fn term_view_draws_threshold_line_while_playing() {
    let state = GameState::default();
    let fb = GameView::default().render(&state, Viewport::new(62, 92));
    // Threshold 600 of 900 lands on interior row 60.
    assert_eq!(fb.get(1, 61).unwrap().ch, '╌');
    assert_eq!(fb.get(60, 61).unwrap().ch, '╌');

    let hidden = GameView::default()
        .with_threshold(false)
        .render(&state, Viewport::new(62, 92));
    assert_eq!(hidden.get(1, 61).unwrap().ch, ' ');
}

#[test]
fn term_view_shows_game_over_message() {
    let state = GameState::default()
        .with_words(WordCollection::from_words([Word::inactive("late", 0, 650)]))
        .on_tick();
    assert!(state.is_over());

    let fb = GameView::default().render(&state, Viewport::new(62, 92));
    let text = screen_text(&fb);
    assert!(text.contains(GAME_OVER_MESSAGE));
    assert!(text.contains("Enter: new game"));
    assert!(!text.contains("late"));
}

#[test]
fn term_view_survives_tiny_viewports() {
    let state = GameState::default().on_tick();
    for (w, h) in [(0, 0), (1, 1), (2, 5), (3, 3)] {
        let fb = GameView::default().render(&state, Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}
