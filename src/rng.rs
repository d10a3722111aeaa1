//! Random index sources used to pick the cheese for each round.
//!
//! The game only ever needs "a uniform index below `len`", so that is the whole
//! trait. Browser builds draw from `crypto.getRandomValues` through `getrandom`
//! (feature `rng`); without it a clock-seeded LCG is used.

/// Uniform index generator.
pub trait RandomSource {
    /// Returns an index in `0..len`. `len == 0` yields 0.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }
}

/// Milliseconds from `performance.now()` in the browser, wall clock elsewhere.
fn clock_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }
}

/// Linear congruential generator seeded from the clock (not crypto secure).
#[derive(Debug, Clone)]
pub struct ClockRandom {
    state: u64,
}

impl ClockRandom {
    pub fn new() -> Self {
        Self::with_seed(clock_seed())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 33) as u32
    }
}

impl Default for ClockRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ClockRandom {
    fn index(&mut self, len: usize) -> usize {
        uniform_below(len, || Some(self.next_u32()))
    }
}

/// OS / browser entropy. Falls back to the clock LCG if `getrandom` fails.
#[cfg(feature = "rng")]
#[derive(Debug, Default, Clone)]
pub struct OsRandom {
    fallback: Option<ClockRandom>,
}

#[cfg(feature = "rng")]
impl OsRandom {
    pub fn new() -> Self {
        Self { fallback: None }
    }

    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        match getrandom::getrandom(&mut buf) {
            Ok(()) => u32::from_le_bytes(buf),
            Err(_) => self.fallback.get_or_insert_with(ClockRandom::new).next_u32(),
        }
    }
}

#[cfg(feature = "rng")]
impl RandomSource for OsRandom {
    fn index(&mut self, len: usize) -> usize {
        uniform_below(len, || Some(self.next_u32()))
    }
}

/// Source used by the browser entry points.
#[cfg(feature = "rng")]
pub type DefaultRandom = OsRandom;
#[cfg(not(feature = "rng"))]
pub type DefaultRandom = ClockRandom;

/// Replays a fixed list of indices (each reduced modulo `len`), cycling.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    picks: Vec<usize>,
    pos: usize,
}

impl ScriptedRandom {
    pub fn new(picks: impl Into<Vec<usize>>) -> Self {
        Self { picks: picks.into(), pos: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&mut self, len: usize) -> usize {
        if len == 0 || self.picks.is_empty() {
            return 0;
        }
        let pick = self.picks[self.pos % self.picks.len()];
        self.pos += 1;
        pick % len
    }
}

/// Rejection sampling over 32-bit draws so every index is equally likely.
fn uniform_below(len: usize, mut draw: impl FnMut() -> Option<u32>) -> usize {
    if len <= 1 {
        return 0;
    }
    let len32 = len.min(u32::MAX as usize) as u32;
    let zone = u32::MAX - (u32::MAX % len32);
    loop {
        match draw() {
            Some(v) if v < zone => return (v % len32) as usize,
            Some(_) => continue,
            None => return 0,
        }
    }
}
