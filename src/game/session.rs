//! Interactive game session
//!
//! A `Session` drives one game: propose a guess, take the observed feedback,
//! narrow the candidate sets, repeat. It owns the round counter and the RNG
//! so the selector itself stays a pure function of its arguments.
//!
//! Two candidate sets are carried. The primary set is the curated list of
//! likely answers; the fallback set covers hidden words that are legal
//! guesses but absent from the curated list. Both are narrowed by every
//! observation, and the fallback is promoted when the primary runs dry.

use crate::core::{Feedback, Word};
use crate::engine::{eliminate, select_guess, EngineConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// State of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameState {
    /// Ready to propose the next guess
    AwaitingGuess,
    /// A guess is outstanding; feedback has not been observed yet
    AwaitingFeedback,
    /// The hidden word was confirmed
    Solved {
        /// The solving word
        word: Word,
        /// Rounds taken, counting the solving guess
        rounds: u32,
    },
    /// Primary and fallback candidates are both exhausted; no known word
    /// fits the observed feedback
    Exhausted,
}

/// One game in progress
pub struct Session {
    dictionary: Vec<Word>,
    candidates: Vec<Word>,
    fallback: Vec<Word>,
    config: EngineConfig,
    rng: StdRng,
    round: u32,
    state: GameState,
    pending: Option<Word>,
    promoted: bool,
}

impl Session {
    /// Start a new session.
    ///
    /// `fallback` may be empty when no secondary set is wanted. In hard mode
    /// the candidate lists are assumed to be drawn from `dictionary`, so the
    /// narrowed dictionary cannot run dry before the candidates do.
    #[must_use]
    pub fn new(
        dictionary: Vec<Word>,
        candidates: Vec<Word>,
        fallback: Vec<Word>,
        config: EngineConfig,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            dictionary,
            candidates,
            fallback,
            config,
            rng,
            round: 1,
            state: GameState::AwaitingGuess,
            pending: None,
            promoted: false,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Current round number, starting at 1
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Words still considered possible answers
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// The guess dictionary (narrowed in hard mode)
    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    /// Whether the last observation promoted the fallback set to primary
    #[must_use]
    pub const fn fallback_promoted(&self) -> bool {
        self.promoted
    }

    /// Propose the next guess and move to `AwaitingFeedback`.
    ///
    /// # Panics
    /// Must only be called in `AwaitingGuess`; the candidate set is non-empty
    /// there by construction.
    pub fn propose(&mut self) -> Word {
        debug_assert!(matches!(self.state, GameState::AwaitingGuess));

        let guess = select_guess(
            &self.dictionary,
            &self.candidates,
            self.round,
            &self.config,
            &mut self.rng,
        );
        self.pending = Some(guess.clone());
        self.state = GameState::AwaitingFeedback;
        guess
    }

    /// Apply one observed feedback code for the outstanding guess.
    ///
    /// All-green feedback solves the game. Otherwise both candidate sets are
    /// narrowed (and the dictionary too, in hard mode); the fallback is
    /// promoted if the primary set runs dry, and the game is exhausted when
    /// both are empty.
    pub fn observe(&mut self, feedback: Feedback) {
        debug_assert!(matches!(self.state, GameState::AwaitingFeedback));
        let Some(guess) = self.pending.take() else {
            return;
        };
        self.promoted = false;

        if feedback.is_perfect() {
            self.state = GameState::Solved {
                word: guess,
                rounds: self.round,
            };
            return;
        }

        self.candidates = eliminate(&self.candidates, &guess, feedback);
        self.fallback = eliminate(&self.fallback, &guess, feedback);
        if self.config.hard_mode {
            self.dictionary = eliminate(&self.dictionary, &guess, feedback);
        }

        if self.candidates.is_empty() && !self.fallback.is_empty() {
            self.candidates = std::mem::take(&mut self.fallback);
            self.promoted = true;
        }

        if self.candidates.is_empty() {
            self.state = GameState::Exhausted;
        } else {
            self.round += 1;
            self.state = GameState::AwaitingGuess;
        }
    }
}
