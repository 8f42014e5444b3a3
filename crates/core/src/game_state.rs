//! Game state module - one tick and one keystroke at a time
//!
//! `GameState` ties the word collection to the word generator and the game
//! configuration. Each event consumes the current state and returns the next
//! one, so a driver only ever holds a single, complete snapshot.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info};

use crate::collection::WordCollection;
use crate::rng::WordGenerator;
use crate::scene::Scene;
use crate::types::{ConfigError, GameConfig, Ink, GAME_OVER_MESSAGE};
use crate::word::Word;

/// Whether the game is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Playing,
    /// Terminal: a word reached the bottom. No further transitions.
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    words: WordCollection,
    generator: WordGenerator,
    config: GameConfig,
    status: Status,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32, config: GameConfig) -> Self {
        Self {
            words: WordCollection::new(),
            generator: WordGenerator::new(seed),
            config,
            status: Status::Playing,
        }
    }

    /// Start a game after checking `config`.
    ///
    /// Without a seed the generator is seeded from the clock.
    pub fn start(seed: Option<u32>, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(seed.unwrap_or_else(clock_seed), config))
    }

    /// Replace the word collection (used to set up specific situations).
    pub fn with_words(self, words: WordCollection) -> Self {
        Self { words, ..self }
    }

    pub fn words(&self) -> &WordCollection {
        &self.words
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == Status::GameOver
    }

    /// Current generator state; seeding a new game with it continues the
    /// same word stream.
    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    /// Advance one tick.
    ///
    /// Ends the game if any word already touches the bottom. Otherwise spawns
    /// a word, drops finished words and moves everything down one step.
    pub fn on_tick(mut self) -> Self {
        if self.is_over() {
            return self;
        }

        if self.words.touches_bottom(self.config.bottom_threshold) {
            info!(
                words = self.words.len(),
                threshold = self.config.bottom_threshold,
                "word reached the bottom, game over"
            );
            return Self {
                words: WordCollection::new(),
                status: Status::GameOver,
                ..self
            };
        }

        let spawned = self.spawn_word();
        let words = std::mem::take(&mut self.words);
        self.words = words
            .add_to_end(spawned)
            .filter_out_empties()
            .move_down(self.config.move_step);
        self
    }

    /// Handle a key press.
    ///
    /// Keys that are not exactly one character leave the state unchanged.
    pub fn on_key(self, key: &str) -> Self {
        match single_char(key) {
            Some(letter) => self.on_letter(letter),
            None => self,
        }
    }

    /// Handle one typed letter.
    ///
    /// With an active word the letter only reduces. Without one it first
    /// tries to activate the oldest matching word and then reduces in the
    /// same step, so the first letter is consumed immediately.
    pub fn on_letter(mut self, letter: char) -> Self {
        if self.is_over() {
            return self;
        }

        let words = std::mem::take(&mut self.words);
        self.words = if words.has_active() {
            words.check_and_reduce(letter)
        } else {
            words.activate(letter).check_and_reduce(letter)
        };
        self
    }

    /// Draw the current state onto `scene`.
    pub fn render<S: Scene>(&self, scene: S) -> S {
        match self.status {
            Status::Playing => self.words.render(scene),
            Status::GameOver => scene.place_text(
                GAME_OVER_MESSAGE,
                self.config.width / 2,
                self.config.height / 2,
                Ink::Message,
            ),
        }
    }

    fn spawn_word(&mut self) -> Word {
        let config = &self.config;
        let length = self
            .generator
            .next_length(config.min_word_length, config.max_word_length);
        let text = self.generator.next_word(length);
        let x = self
            .generator
            .next_offset(config.horizontal_margin, config.spawn_columns());
        debug!(text = %text, x, y = config.spawn_y, "spawned word");
        Word::inactive(text, x, config.spawn_y)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1, GameConfig::default())
    }
}

fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Start a game with the reference configuration.
///
/// Without a seed the generator is seeded from the clock.
pub fn initial_state(seed: Option<u32>) -> GameState {
    let seed = seed.unwrap_or_else(clock_seed);
    GameState::new(seed, GameConfig::default())
}

pub fn on_tick(state: GameState) -> GameState {
    state.on_tick()
}

pub fn on_key(state: GameState, key: &str) -> GameState {
    state.on_key(key)
}

pub fn render<S: Scene>(state: &GameState, scene: S) -> S {
    state.render(scene)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DrawCommand;

    fn state_with(words: impl IntoIterator<Item = Word>) -> GameState {
        GameState::default().with_words(WordCollection::from_words(words))
    }

    #[test]
    fn test_new_game_is_empty_and_playing() {
        let state = GameState::new(42, GameConfig::default());
        assert!(state.words().is_empty());
        assert_eq!(state.status(), Status::Playing);
        assert!(!state.is_over());
    }

    #[test]
    fn test_tick_spawns_and_moves_seeded_word() {
        let state = GameState::new(20, GameConfig::default()).on_tick();
        assert_eq!(
            state.words(),
            &WordCollection::from_words([Word::inactive("cnks", 342, 35)])
        );
    }

    #[test]
    fn test_ticks_are_reproducible() {
        let run = |seed| {
            (0..5).fold(GameState::new(seed, GameConfig::default()), |s, _| s.on_tick())
        };
        assert_eq!(run(9), run(9));
        assert_ne!(run(9).words(), run(10).words());
    }

    #[test]
    fn test_tick_spawns_within_config() {
        let config = GameConfig::default();
        let mut state = GameState::new(3, config);
        for _ in 0..20 {
            state = state.on_tick();
            let newest = state.words().words().last().unwrap();
            let len = newest.text().chars().count();
            assert!((config.min_word_length..=config.max_word_length).contains(&len));
            assert!(newest.x() >= config.horizontal_margin);
            assert!(newest.x() < config.width - config.right_margin);
            assert_eq!(newest.y(), config.spawn_y + config.move_step);
            assert!(!newest.is_active());
        }
    }

    #[test]
    fn test_tick_filters_consumed_words() {
        let state = state_with([Word::active("", 100, 100), Word::inactive("keep", 50, 50)]).on_tick();
        assert_eq!(state.words().len(), 2);
        assert_eq!(state.words().words()[0], Word::inactive("keep", 50, 75));
    }

    #[test]
    fn test_tick_ends_game_when_word_touches_bottom() {
        let state = state_with([
            Word::inactive("safe", 100, 10),
            Word::active("low", 100, 600),
        ])
        .on_tick();
        assert!(state.is_over());
        assert!(state.words().is_empty());
    }

    #[test]
    fn test_tick_just_above_threshold_keeps_playing() {
        let state = state_with([Word::inactive("close", 100, 599)]).on_tick();
        assert!(!state.is_over());
        // Checked before moving: the word now sits past the threshold.
        assert!(state.on_tick().is_over());
    }

    #[test]
    fn test_game_over_is_terminal() {
        let over = state_with([Word::inactive("x", 0, 700)]).on_tick();
        assert!(over.is_over());
        assert_eq!(over.clone().on_tick(), over);
        assert_eq!(over.clone().on_key("x"), over);
    }

    #[test]
    fn test_key_activates_and_reduces_in_one_step() {
        let state = state_with([Word::inactive("Hi", 11, 6), Word::inactive("Earth", 0, 399)]).on_key("H");
        assert_eq!(
            state.words(),
            &WordCollection::from_words([Word::active("i", 11, 6), Word::inactive("Earth", 0, 399)])
        );
    }

    #[test]
    fn test_key_with_active_word_only_reduces() {
        let state = state_with([Word::active("ok", 0, 0), Word::inactive("kite", 5, 5)]);
        let state = state.on_key("k");
        // Wrong letter for the active word, and "kite" is not activated.
        assert_eq!(
            state.words(),
            &WordCollection::from_words([Word::active("ok", 0, 0), Word::inactive("kite", 5, 5)])
        );

        let state = state.on_key("o").on_key("k");
        assert_eq!(
            state.words(),
            &WordCollection::from_words([Word::active("", 0, 0), Word::inactive("kite", 5, 5)])
        );
    }

    #[test]
    fn test_inactive_word_sharing_letter_is_untouched() {
        let state = state_with([Word::active("aa", 0, 0), Word::inactive("ab", 5, 5)]).on_key("a");
        assert_eq!(
            state.words(),
            &WordCollection::from_words([Word::active("a", 0, 0), Word::inactive("ab", 5, 5)])
        );
    }

    #[test]
    fn test_unmatched_and_malformed_keys_are_noops() {
        let state = state_with([Word::inactive("cat", 0, 0)]);
        assert_eq!(state.clone().on_key("z"), state);
        assert_eq!(state.clone().on_key(""), state);
        assert_eq!(state.clone().on_key("ca"), state);
        assert_eq!(state.clone().on_key("shift"), state);
    }

    #[test]
    fn test_render_playing_and_game_over() {
        let state = state_with([Word::inactive("red", 1, 2), Word::active("green", 3, 4)]);
        assert_eq!(
            state.render(Vec::new()),
            vec![
                DrawCommand::new("red", 1, 2, Ink::Inactive),
                DrawCommand::new("green", 3, 4, Ink::Active),
            ]
        );

        let over = state_with([Word::inactive("x", 0, 900)]).on_tick();
        assert_eq!(
            over.render(Vec::new()),
            vec![DrawCommand::new(GAME_OVER_MESSAGE, 300, 450, Ink::Message)]
        );
    }

    #[test]
    fn test_start_checks_config() {
        let state = GameState::start(Some(20), GameConfig::default()).unwrap();
        assert_eq!(state, GameState::new(20, GameConfig::default()));

        let oversized = GameConfig {
            max_word_length: usize::MAX,
            ..GameConfig::default()
        };
        assert!(matches!(
            GameState::start(Some(20), oversized),
            Err(ConfigError::WordLengthTooLarge { .. })
        ));

        let clocked = GameState::start(None, GameConfig::default()).unwrap();
        assert!(clocked.words().is_empty());
        assert!(!clocked.is_over());
    }

    #[test]
    fn test_entry_points() {
        let state = initial_state(Some(20));
        assert!(state.words().is_empty());
        let state = on_tick(state);
        let first = state.words().words()[0].clone();
        let letter = first.text().chars().next().unwrap();
        let state = on_key(state, &letter.to_string());
        assert!(state.words().words()[0].is_active());
        assert_eq!(render(&state, Vec::new()).len(), 1);
    }

    #[test]
    fn test_single_char() {
        assert_eq!(single_char("a"), Some('a'));
        assert_eq!(single_char("é"), Some('é'));
        assert_eq!(single_char(""), None);
        assert_eq!(single_char("ab"), None);
    }
}
