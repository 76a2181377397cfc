use std::rc::Rc;

use yew::Reducible;

use crate::config::{FADE_IN_MS, FADE_OUT_MS, STAY_MS, TYPE_CHAR_MS};
use crate::error::{Result, SiteError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    FadeIn,
    Typing,
    Stay,
    FadeOut,
}

impl Phase {
    /// CSS class the rotating word carries in this phase.
    pub fn class(self) -> &'static str {
        match self {
            Phase::FadeIn => "fadeIn",
            Phase::Typing => "typing",
            Phase::Stay => "stay",
            Phase::FadeOut => "fadeOut",
        }
    }
}

/// Typewriter rotation over a fixed word list.
///
/// Every state has exactly one pending timer ([`RotationState::delay_ms`]);
/// when it expires the owner calls [`RotationState::advance`]. `step` counts
/// transitions so a timer armed for an earlier state can be recognised and
/// dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationState {
    words: Rc<[String]>,
    index: usize,
    phase: Phase,
    typed: usize,
    step: u64,
}

impl RotationState {
    pub fn new(words: Vec<String>) -> Result<Self> {
        if words.is_empty() {
            return Err(SiteError::EmptyWordList);
        }
        Ok(RotationState {
            words: words.into(),
            index: 0,
            phase: Phase::FadeIn,
            typed: 0,
            step: 0,
        })
    }

    /// Single empty word; keeps the badge alive when no words are configured.
    pub fn blank() -> Self {
        RotationState {
            words: vec![String::new()].into(),
            index: 0,
            phase: Phase::FadeIn,
            typed: 0,
            step: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn current_word(&self) -> &str {
        &self.words[self.index]
    }

    fn word_len(&self) -> usize {
        self.current_word().chars().count()
    }

    /// The typed prefix of the current word.
    pub fn display_text(&self) -> &str {
        let word = self.current_word();
        match word.char_indices().nth(self.typed) {
            Some((end, _)) => &word[..end],
            None => word,
        }
    }

    pub fn show_cursor(&self) -> bool {
        self.phase == Phase::Typing && self.typed < self.word_len()
    }

    /// How long the current state waits before [`advance`](Self::advance).
    pub fn delay_ms(&self) -> u32 {
        match self.phase {
            Phase::FadeIn => FADE_IN_MS,
            Phase::Typing => TYPE_CHAR_MS,
            Phase::Stay => STAY_MS,
            Phase::FadeOut => FADE_OUT_MS,
        }
    }

    /// Applies the transition for the timer that just expired.
    pub fn advance(&mut self) {
        match self.phase {
            Phase::FadeIn => {
                self.typed = 0;
                self.phase = Phase::Typing;
                self.finish_typing_if_complete();
            }
            Phase::Typing => {
                self.typed += 1;
                self.finish_typing_if_complete();
            }
            Phase::Stay => self.phase = Phase::FadeOut,
            Phase::FadeOut => {
                self.typed = 0;
                self.index = (self.index + 1) % self.words.len();
                self.phase = Phase::FadeIn;
            }
        }
        self.step += 1;
    }

    // A fully typed word moves straight on, with no per-character timer left.
    fn finish_typing_if_complete(&mut self) {
        if self.typed >= self.word_len() {
            self.typed = self.word_len();
            self.phase = Phase::Stay;
        }
    }
}

/// Timer expiry for the state at `step`.
pub struct Elapsed(pub u64);

impl Reducible for RotationState {
    type Action = Elapsed;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if action.0 != self.step {
            return self;
        }
        let mut next = (*self).clone();
        next.advance();
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    /// Runs timers until the phase changes; returns the elapsed time.
    fn run_phase(state: &mut RotationState) -> u32 {
        let phase = state.phase();
        let mut elapsed = 0;
        while state.phase() == phase {
            elapsed += state.delay_ms();
            state.advance();
        }
        elapsed
    }

    #[test]
    fn starts_in_fade_in_with_empty_text() {
        let state = RotationState::new(words(&["podcast"])).unwrap();
        assert_eq!(state.phase(), Phase::FadeIn);
        assert_eq!(state.display_text(), "");
        assert!(!state.show_cursor());
    }

    #[test]
    fn empty_word_list_is_rejected() {
        assert!(matches!(RotationState::new(Vec::new()), Err(SiteError::EmptyWordList)));
    }

    #[test]
    fn podcast_cycle_takes_5500ms() {
        let mut state = RotationState::new(words(&["podcast", "media", "marketing"])).unwrap();

        let mut total = 0;
        for expected in [Phase::FadeIn, Phase::Typing, Phase::Stay, Phase::FadeOut] {
            assert_eq!(state.phase(), expected);
            total += run_phase(&mut state);
        }

        assert_eq!(total, 800 + 7 * 100 + 3500 + 500);
        assert_eq!(state.index, 1);
        assert_eq!(state.phase(), Phase::FadeIn);
        assert_eq!(state.display_text(), "");
    }

    #[test]
    fn typing_emits_one_update_per_character() {
        let mut state = RotationState::new(words(&["media"])).unwrap();
        state.advance(); // fade-in done
        assert_eq!(state.phase(), Phase::Typing);
        assert_eq!(state.display_text(), "");
        assert!(state.show_cursor());

        let mut updates = Vec::new();
        while state.phase() == Phase::Typing {
            state.advance();
            updates.push(state.display_text().to_string());
        }

        assert_eq!(updates, vec!["m", "me", "med", "medi", "media"]);
        assert_eq!(state.phase(), Phase::Stay);
        assert!(!state.show_cursor());
    }

    #[test]
    fn cursor_only_while_typing_incomplete() {
        let mut state = RotationState::new(words(&["ab"])).unwrap();
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push((state.phase(), state.show_cursor()));
            state.advance();
        }
        assert_eq!(
            seen,
            vec![
                (Phase::FadeIn, false),
                (Phase::Typing, true),
                (Phase::Typing, true),
                (Phase::Stay, false),
                (Phase::FadeOut, false),
                (Phase::FadeIn, false),
            ]
        );
    }

    #[test]
    fn visits_words_cyclically() {
        let mut state = RotationState::new(words(&["a", "b", "c"])).unwrap();
        let mut typed = Vec::new();
        while typed.len() < 7 {
            state.advance();
            if state.phase() == Phase::Stay {
                typed.push(state.display_text().to_string());
            }
        }
        assert_eq!(typed, vec!["a", "b", "c", "a", "b", "c", "a"]);
    }

    #[test]
    fn multibyte_words_type_by_character() {
        let mut state = RotationState::new(words(&["گشتک"])).unwrap();
        state.advance();
        let mut updates = Vec::new();
        while state.phase() == Phase::Typing {
            state.advance();
            updates.push(state.display_text().to_string());
        }
        assert_eq!(updates, vec!["گ", "گش", "گشت", "گشتک"]);
    }

    #[test]
    fn empty_word_skips_straight_to_stay() {
        let mut state = RotationState::new(words(&["", "x"])).unwrap();
        state.advance();
        assert_eq!(state.phase(), Phase::Stay);
        assert_eq!(state.display_text(), "");
    }

    #[test]
    fn stale_timer_is_ignored() {
        let state = Rc::new(RotationState::new(words(&["podcast"])).unwrap());
        let stale = state.step();

        let next = state.clone().reduce(Elapsed(stale));
        assert_eq!(next.phase(), Phase::Typing);

        // A second expiry armed for the fade-in state must not advance typing.
        let again = next.clone().reduce(Elapsed(stale));
        assert!(Rc::ptr_eq(&next, &again));
        assert_eq!(again.display_text(), "");
    }
}
