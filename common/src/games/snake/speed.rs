use std::time::Duration;

/// Foods eaten per speed band.
pub const SCORE_PER_BAND: u32 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Speed {
    Slow,
    Medium,
    Fast,
    VeryFast,
    Extreme,
}

impl Speed {
    pub fn for_score(score: u32) -> Speed {
        match score / SCORE_PER_BAND {
            0 => Speed::Slow,
            1 => Speed::Medium,
            2 => Speed::Fast,
            3 => Speed::VeryFast,
            _ => Speed::Extreme,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        match self {
            Speed::Slow => 170,
            Speed::Medium => 140,
            Speed::Fast => 110,
            Speed::VeryFast => 90,
            Speed::Extreme => 70,
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms())
    }
}
