//! Game tuning. Defaults reproduce the classic rules; the two boolean flags
//! opt into corrected behaviour for known quirks.

pub const MAX_TRIES: u8 = 5;
pub const HISTORY_LEN: usize = 10;
/// Upper bound accepted from JSON overrides.
pub const MAX_HISTORY_LEN: usize = 100;
pub const FULL_POINTS: u32 = 100;
pub const PARTIAL_POINTS: u32 = 50;
/// A win with at least this many tries left earns full points.
pub const FULL_POINTS_MIN_TRIES: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Hard-mode try budget per round.
    pub max_tries: u8,
    /// How many past answers the "Last 10" log keeps.
    pub history_len: usize,
    pub full_points: u32,
    pub partial_points: u32,
    pub full_points_min_tries: u8,
    /// Show the target's name heading before it is guessed (classic behaviour).
    pub reveal_answer: bool,
    /// Start a fresh round whenever the mode is toggled.
    pub reset_round_on_toggle: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_tries: MAX_TRIES,
            history_len: HISTORY_LEN,
            full_points: FULL_POINTS,
            partial_points: PARTIAL_POINTS,
            full_points_min_tries: FULL_POINTS_MIN_TRIES,
            reveal_answer: true,
            reset_round_on_toggle: false,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON object; missing keys keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut cfg: Self = serde_json::from_str(json)?;
        // Hard rounds need at least one try.
        if cfg.max_tries == 0 {
            cfg.max_tries = MAX_TRIES;
        }
        cfg.history_len = cfg.history_len.min(MAX_HISTORY_LEN);
        Ok(cfg)
    }

    /// Points for a correct guess made with `tries_remaining` tries left.
    pub fn points_for(&self, tries_remaining: u8) -> u32 {
        if tries_remaining >= self.full_points_min_tries {
            self.full_points
        } else {
            self.partial_points
        }
    }
}
