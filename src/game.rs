//! Game state machine.
//!
//! `GameState` is a plain value. Every transition borrows the current state and
//! returns the next one, so the rules can be exercised without a browser.
//!
//! States: no round yet (`round == None`) and a round in progress. A correct
//! guess scores and starts a new round; running out of tries in hard mode
//! resets the streak and the try budget but keeps the same target.

use std::collections::VecDeque;

use crate::catalog::{CATALOG, Item};
use crate::config::GameConfig;
use crate::rng::RandomSource;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Multiple choice, unlimited guesses.
    Easy,
    /// Free text with a try budget.
    #[default]
    Hard,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Easy => Mode::Hard,
            Mode::Hard => Mode::Easy,
        }
    }
}

/// The round currently being played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    pub target: &'static Item,
    /// Hard mode counts down from `max_tries`; always 0 in easy mode.
    pub tries_remaining: u8,
    /// Raw wrong guesses in the order they were made.
    pub wrong_guesses: Vec<String>,
    /// Mode the round was started in. Try accounting follows this, not the
    /// selected mode, so toggling mid-round never corrupts the budget.
    pub mode: Mode,
}

/// Result of a single `submit_guess`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// No round has been started yet; nothing changed.
    NoRound,
    Correct { name: &'static str, points: u32 },
    Wrong { tries_remaining: u8 },
    /// Hard-mode budget exhausted. Streak reset, same target, fresh tries.
    OutOfTries { name: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    config: GameConfig,
    round: Option<Round>,
    mode: Mode,
    score: u32,
    streak: u32,
    history: VecDeque<&'static str>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameState {
    /// Idle state in hard mode with nothing scored.
    pub fn new(config: GameConfig) -> Self {
        Self {
            history: VecDeque::new(),
            config,
            round: None,
            mode: Mode::default(),
            score: 0,
            streak: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn is_idle(&self) -> bool {
        self.round.is_none()
    }

    /// Selected mode, which the next round will use.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Recently won names, oldest first.
    pub fn history(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.history.iter().copied()
    }

    /// Start a round in `mode` with a random target. Score, streak and history carry over.
    pub fn start_new_game(&self, mode: Mode, rng: &mut impl RandomSource) -> Self {
        let mut next = self.clone();
        next.mode = mode;
        next.round = Some(next.fresh_round(pick_target(rng)));
        next
    }

    pub fn submit_guess(&self, raw: &str, rng: &mut impl RandomSource) -> (Self, GuessOutcome) {
        let mut next = self.clone();
        let outcome = next.apply_guess(raw, rng);
        (next, outcome)
    }

    /// Flip the selected mode. The active round is left as it is.
    pub fn toggle_mode(&self) -> Self {
        let mut next = self.clone();
        next.mode = next.mode.toggled();
        next
    }

    /// Flip the mode and, when `reset_round_on_toggle` is set and a round is
    /// active, start a new round in the new mode.
    pub fn toggle_mode_with(&self, rng: &mut impl RandomSource) -> Self {
        let next = self.toggle_mode();
        if next.config.reset_round_on_toggle && next.round.is_some() {
            next.start_new_game(next.mode, rng)
        } else {
            next
        }
    }

    fn starting_tries(&self) -> u8 {
        match self.mode {
            Mode::Hard => self.config.max_tries.max(1),
            Mode::Easy => 0,
        }
    }

    fn fresh_round(&self, target: &'static Item) -> Round {
        Round {
            target,
            tries_remaining: self.starting_tries(),
            wrong_guesses: Vec::new(),
            mode: self.mode,
        }
    }

    fn apply_guess(&mut self, raw: &str, rng: &mut impl RandomSource) -> GuessOutcome {
        let Some(round) = self.round.as_mut() else {
            return GuessOutcome::NoRound;
        };
        let target = round.target;

        if target.matches(raw) {
            let points = self.config.points_for(round.tries_remaining);
            self.score = self.score.saturating_add(points);
            self.streak = self.streak.saturating_add(1);
            self.record_win(target.name);
            self.round = Some(self.fresh_round(pick_target(rng)));
            return GuessOutcome::Correct { name: target.name, points };
        }

        round.wrong_guesses.push(raw.to_owned());
        if round.mode == Mode::Easy {
            return GuessOutcome::Wrong { tries_remaining: round.tries_remaining };
        }

        round.tries_remaining = round.tries_remaining.saturating_sub(1);
        if round.tries_remaining > 0 {
            return GuessOutcome::Wrong { tries_remaining: round.tries_remaining };
        }

        self.streak = 0;
        self.round = Some(self.fresh_round(target));
        GuessOutcome::OutOfTries { name: target.name }
    }

    fn record_win(&mut self, name: &'static str) {
        self.history.push_back(name);
        while self.history.len() > self.config.history_len {
            self.history.pop_front();
        }
    }
}

fn pick_target(rng: &mut impl RandomSource) -> &'static Item {
    &CATALOG[rng.index(CATALOG.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;

    // Catalog order: Cheddar, Brie, Blue, Gouda, Feta.
    fn started(mode: Mode, pick: usize) -> GameState {
        GameState::default().start_new_game(mode, &mut ScriptedRandom::new(vec![pick]))
    }

    fn target(state: &GameState) -> &'static str {
        state.round().unwrap().target.name
    }

    #[test]
    fn new_game_sets_tries_per_mode() {
        let hard = started(Mode::Hard, 0);
        let round = hard.round().unwrap();
        assert_eq!(round.tries_remaining, 5);
        assert!(round.wrong_guesses.is_empty());
        assert_eq!(round.mode, Mode::Hard);

        let easy = started(Mode::Easy, 0);
        assert_eq!(easy.round().unwrap().tries_remaining, 0);
        assert_eq!(easy.mode(), Mode::Easy);
    }

    #[test]
    fn guess_while_idle_is_noop() {
        let idle = GameState::default();
        let (next, outcome) = idle.submit_guess("Cheddar", &mut ScriptedRandom::new(vec![0]));
        assert_eq!(outcome, GuessOutcome::NoRound);
        assert_eq!(next, idle);
    }

    #[test]
    fn correct_guess_on_first_try_scores_full() {
        let state = started(Mode::Hard, 0);
        let (next, outcome) = state.submit_guess("cheddar", &mut ScriptedRandom::new(vec![2]));
        assert_eq!(outcome, GuessOutcome::Correct { name: "Cheddar", points: 100 });
        assert_eq!(next.score(), 100);
        assert_eq!(next.streak(), 1);
        assert_eq!(next.history().collect::<Vec<_>>(), vec!["Cheddar"]);
        let round = next.round().unwrap();
        assert_eq!(round.target.name, "Blue");
        assert_eq!(round.tries_remaining, 5);
        assert!(round.wrong_guesses.is_empty());
    }

    #[test]
    fn late_win_scores_partial() {
        let mut rng = ScriptedRandom::new(vec![1]);
        let mut state = started(Mode::Hard, 1);
        state = state.submit_guess("x", &mut rng).0;
        // one miss still earns full points
        let (won, outcome) = state.submit_guess("BRIE", &mut rng);
        assert_eq!(outcome, GuessOutcome::Correct { name: "Brie", points: 100 });

        let mut state = won;
        for g in ["x", "y"] {
            state = state.submit_guess(g, &mut rng).0;
        }
        assert_eq!(state.round().unwrap().tries_remaining, 3);
        let (won, outcome) = state.submit_guess("brie", &mut rng);
        assert_eq!(outcome, GuessOutcome::Correct { name: "Brie", points: 50 });
        assert_eq!(won.score(), 150);
        assert_eq!(won.streak(), 2);
    }

    #[test]
    fn five_misses_reset_budget_and_streak_but_keep_target() {
        let mut rng = ScriptedRandom::new(vec![1]);
        let mut state = started(Mode::Hard, 1);
        state = state.submit_guess("Brie", &mut rng).0;
        assert_eq!(state.streak(), 1);
        assert_eq!(target(&state), "Brie");

        let mut last = GuessOutcome::NoRound;
        for (i, g) in ["a", "b", "c", "d", "e"].into_iter().enumerate() {
            let (next, outcome) = state.submit_guess(g, &mut rng);
            state = next;
            if i < 4 {
                assert_eq!(outcome, GuessOutcome::Wrong { tries_remaining: 4 - i as u8 });
                assert_eq!(state.round().unwrap().wrong_guesses.len(), i + 1);
            }
            last = outcome;
        }
        assert_eq!(last, GuessOutcome::OutOfTries { name: "Brie" });
        let round = state.round().unwrap();
        assert_eq!(round.tries_remaining, 5);
        assert!(round.wrong_guesses.is_empty());
        assert_eq!(round.target.name, "Brie");
        assert_eq!(state.streak(), 0);
        assert_eq!(state.score(), 100);
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn wrong_guesses_keep_raw_text_and_duplicates() {
        let mut rng = ScriptedRandom::new(vec![0]);
        let mut state = started(Mode::Hard, 4);
        for g in ["", "  ", "feta ", ""] {
            state = state.submit_guess(g, &mut rng).0;
        }
        assert_eq!(state.round().unwrap().wrong_guesses, vec!["", "  ", "feta ", ""]);
        assert_eq!(state.round().unwrap().tries_remaining, 1);
    }

    #[test]
    fn easy_mode_never_runs_out() {
        let mut rng = ScriptedRandom::new(vec![4]);
        let mut state = started(Mode::Easy, 4);
        for _ in 0..20 {
            let (next, outcome) = state.submit_guess("Gouda", &mut rng);
            assert_eq!(outcome, GuessOutcome::Wrong { tries_remaining: 0 });
            state = next;
        }
        assert_eq!(state.round().unwrap().wrong_guesses.len(), 20);
        let (won, outcome) = state.submit_guess("Feta", &mut rng);
        assert_eq!(outcome, GuessOutcome::Correct { name: "Feta", points: 50 });
        assert_eq!(won.round().unwrap().mode, Mode::Easy);
    }

    #[test]
    fn history_caps_at_ten_evicting_oldest() {
        let picks: Vec<usize> = (0..12).map(|i| i % 5).collect();
        let mut rng = ScriptedRandom::new(picks[1..].to_vec());
        let mut state = started(Mode::Hard, picks[0]);
        let mut won = Vec::new();
        for _ in 0..12 {
            let name = target(&state);
            won.push(name);
            state = state.submit_guess(name, &mut rng).0;
        }
        let history: Vec<_> = state.history().collect();
        assert_eq!(history.len(), 10);
        assert_eq!(history, won[2..].to_vec());
        assert_eq!(state.score(), 1200);
        assert_eq!(state.streak(), 12);
    }

    #[test]
    fn new_game_keeps_score_streak_history() {
        let mut rng = ScriptedRandom::new(vec![3]);
        let state = started(Mode::Hard, 0).submit_guess("Cheddar", &mut rng).0;
        let restarted = state.start_new_game(Mode::Easy, &mut rng);
        assert_eq!(restarted.score(), 100);
        assert_eq!(restarted.streak(), 1);
        assert_eq!(restarted.history().collect::<Vec<_>>(), vec!["Cheddar"]);
        assert_eq!(restarted.round().unwrap().tries_remaining, 0);
    }

    #[test]
    fn toggle_leaves_round_untouched() {
        let mut rng = ScriptedRandom::new(vec![2]);
        let state = started(Mode::Hard, 2).submit_guess("nope", &mut rng).0;
        let toggled = state.toggle_mode_with(&mut rng);
        assert_eq!(toggled.mode(), Mode::Easy);
        assert_eq!(toggled.round(), state.round());
        assert_eq!(toggled.round().unwrap().mode, Mode::Hard);

        // Round keeps hard accounting; the next round follows the new mode.
        let (after, outcome) = toggled.submit_guess("nope", &mut rng);
        assert_eq!(outcome, GuessOutcome::Wrong { tries_remaining: 3 });
        let (won, _) = after.submit_guess("blue", &mut rng);
        assert_eq!(won.round().unwrap().mode, Mode::Easy);
        assert_eq!(won.round().unwrap().tries_remaining, 0);
        assert_eq!(won.toggle_mode().toggle_mode().mode(), Mode::Easy);
    }

    #[test]
    fn toggle_can_reset_round() {
        let config = GameConfig { reset_round_on_toggle: true, ..GameConfig::default() };
        let mut rng = ScriptedRandom::new(vec![3]);
        let state = GameState::new(config)
            .start_new_game(Mode::Hard, &mut rng)
            .submit_guess("nope", &mut rng)
            .0;
        let toggled = state.toggle_mode_with(&mut rng);
        let round = toggled.round().unwrap();
        assert_eq!(round.mode, Mode::Easy);
        assert_eq!(round.tries_remaining, 0);
        assert!(round.wrong_guesses.is_empty());

        // idle stays idle
        let idle = GameState::new(toggled.config().clone()).toggle_mode_with(&mut rng);
        assert!(idle.is_idle());
        assert_eq!(idle.mode(), Mode::Easy);
    }

    #[test]
    fn huge_history_len_does_not_allocate_up_front() {
        let config = GameConfig { history_len: usize::MAX, ..GameConfig::default() };
        let mut rng = ScriptedRandom::new(vec![0]);
        let state = GameState::new(config).start_new_game(Mode::Hard, &mut rng);
        let (state, _) = state.submit_guess("Cheddar", &mut rng);
        assert_eq!(state.history().collect::<Vec<_>>(), vec!["Cheddar"]);
    }

    #[test]
    fn loss_after_toggle_restarts_in_selected_mode() {
        let mut rng = ScriptedRandom::new(vec![0]);
        let mut state = started(Mode::Hard, 0).toggle_mode();
        for g in ["a", "b", "c", "d"] {
            state = state.submit_guess(g, &mut rng).0;
        }
        let (state, outcome) = state.submit_guess("e", &mut rng);
        assert_eq!(outcome, GuessOutcome::OutOfTries { name: "Cheddar" });
        let round = state.round().unwrap();
        assert_eq!(round.mode, Mode::Easy);
        assert_eq!(round.tries_remaining, 0);
        assert_eq!(round.target.name, "Cheddar");
    }
}
