//! Word collection - the ordered set of words on screen
//!
//! Words are kept in spawn order, oldest first. That order decides which word
//! a keystroke activates when several start with the same letter.
//!
//! All transformations take the collection by value and return the next one.

use tracing::debug;

use crate::scene::Scene;
use crate::word::Word;

/// Ordered sequence of words.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WordCollection {
    words: Vec<Word>,
}

impl WordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Reduce every word whose first letter is `letter`.
    ///
    /// This is not limited to the active word: any match is asked to reduce,
    /// and inactive words answer with themselves.
    pub fn check_and_reduce(self, letter: char) -> Self {
        self.map(|w| if w.matches(letter) { w.reduce() } else { w })
    }

    pub fn add_to_end(mut self, word: Word) -> Self {
        self.words.push(word);
        self
    }

    /// Drop every word with no text left, keeping survivors in order.
    pub fn filter_out_empties(mut self) -> Self {
        let before = self.words.len();
        self.words.retain(|w| !w.is_empty());
        let cleared = before - self.words.len();
        if cleared > 0 {
            debug!(cleared, "removed finished words");
        }
        self
    }

    pub fn move_down(self, step: i32) -> Self {
        self.map(|w| w.move_down(step))
    }

    /// Draw every word in collection order (later words draw on top).
    pub fn render<S: Scene>(&self, scene: S) -> S {
        self.words.iter().fold(scene, |scene, w| w.draw(scene))
    }

    /// True if any word has reached `height`.
    pub fn touches_bottom(&self, height: i32) -> bool {
        self.words.iter().any(|w| w.touches_bottom(height))
    }

    /// Activate the oldest word starting with `letter`.
    ///
    /// Does nothing while another word is active, so at most one word is
    /// ever active.
    pub fn activate(mut self, letter: char) -> Self {
        if self.has_active() {
            return self;
        }
        if let Some(idx) = self.words.iter().position(|w| w.matches(letter)) {
            let word = self.words[idx].clone().activate();
            debug!(text = word.text(), x = word.x(), y = word.y(), "activated word");
            self.words[idx] = word;
        }
        self
    }

    pub fn has_active(&self) -> bool {
        self.words.iter().any(Word::is_active)
    }

    /// The word currently being typed, if any.
    pub fn active_word(&self) -> Option<&Word> {
        self.words.iter().find(|w| w.is_active())
    }

    fn map(self, f: impl FnMut(Word) -> Word) -> Self {
        Self {
            words: self.words.into_iter().map(f).collect(),
        }
    }
}

impl FromIterator<Word> for WordCollection {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

impl<'a> IntoIterator for &'a WordCollection {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
