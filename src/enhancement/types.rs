use serde::Serialize;
use std::fmt;

/// Highest target level a run may request.
pub const MAX_TARGET_LEVEL: u8 = 9;

/// Highest level the built-in schedule has a condition for.
pub const MAX_SCHEDULE_LEVEL: u8 = 10;

pub const SLIVER_PER_ATTEMPT: u64 = 500_000;
pub const TICKETS_PER_RECOVERY: u64 = 200;

/// Chance, in percent, that a recovery ticket cancels a level-down.
pub const RECOVERY_CHANCE: u32 = 50;

/// Base success chance in percent, indexed by current level (0-10).
pub const BASE_SUCCESS_RATES: [u32; 11] = [
    80, 60, 40, 20, // 0-3
    10, 7, 6, // 4-6
    3, 1, 1, 1, // 7-10
];

/// Probability booster applied automatically at some levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Acrum {
    None,
    V,
    X,
}

impl Acrum {
    /// Success multiplier in tenths (10 = x1.0).
    pub fn multiplier(self) -> u32 {
        match self {
            Acrum::None => 10,
            Acrum::V => 15,
            Acrum::X => 20,
        }
    }
}

/// What an attempt at a given level spends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub uses_recovery_ticket: bool,
    pub acrum: Acrum,
}

impl Condition {
    pub const fn new(uses_recovery_ticket: bool, acrum: Acrum) -> Self {
        Self {
            uses_recovery_ticket,
            acrum,
        }
    }
}

pub const STANDARD_CONDITIONS: [Condition; 11] = [
    Condition::new(false, Acrum::None), // 0
    Condition::new(false, Acrum::None), // 1
    Condition::new(false, Acrum::None), // 2
    Condition::new(false, Acrum::V),    // 3
    Condition::new(true, Acrum::V),     // 4
    Condition::new(true, Acrum::X),     // 5
    Condition::new(true, Acrum::X),     // 6
    Condition::new(true, Acrum::X),     // 7
    Condition::new(true, Acrum::X),     // 8
    Condition::new(true, Acrum::X),     // 9
    Condition::new(true, Acrum::X),     // 10
];

/// Per-level success rates and conditions. Built once and shared read-only
/// by every worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    base_rates: Vec<u32>,
    conditions: Vec<Condition>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self::standard()
    }
}

impl Schedule {
    /// The fixed in-game schedule for levels 0-10.
    pub fn standard() -> Self {
        Self {
            base_rates: BASE_SUCCESS_RATES.to_vec(),
            conditions: STANDARD_CONDITIONS.to_vec(),
        }
    }

    /// Fault-injection hook: keep only levels `0..=max_level`, leaving every
    /// higher level without a condition. Not a way to configure rates.
    #[doc(hidden)]
    pub fn truncated(max_level: u8) -> Self {
        let len = (max_level as usize + 1).min(STANDARD_CONDITIONS.len());
        Self {
            base_rates: BASE_SUCCESS_RATES[..len].to_vec(),
            conditions: STANDARD_CONDITIONS[..len].to_vec(),
        }
    }

    pub fn condition(&self, level: u8) -> Option<&Condition> {
        self.conditions.get(level as usize)
    }

    /// Base success chance in percent, 0 for unknown levels.
    pub fn base_rate(&self, level: u8) -> u32 {
        self.base_rates.get(level as usize).copied().unwrap_or(0)
    }

    /// Success chance in whole percent with the acrum applied. The tenths
    /// multiplier truncates, so 7% with X is 14% and 1% with V stays 1%.
    pub fn success_probability(&self, level: u8, acrum: Acrum) -> u32 {
        (self.base_rate(level) * acrum.multiplier() / 10).min(100)
    }

    /// Highest level with a registered condition, if any.
    pub fn max_level(&self) -> Option<u8> {
        self.conditions.len().checked_sub(1).map(|l| l as u8)
    }
}

/// Mutable per-trial progress. Owned by exactly one trial.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialState {
    pub attempt_count: u64,
    pub level: u8,
    pub recovery_tickets_used: u64,
    pub acrum_v_uses: u64,
    pub acrum_x_uses: u64,
}

impl TrialState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Final tallies of one trial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrialResult {
    pub attempt_count: u64,
    pub recovery_tickets_used: u64,
    pub acrum_v_uses: u64,
    pub acrum_x_uses: u64,
}

impl From<&TrialState> for TrialResult {
    fn from(state: &TrialState) -> Self {
        Self {
            attempt_count: state.attempt_count,
            recovery_tickets_used: state.recovery_tickets_used,
            acrum_v_uses: state.acrum_v_uses,
            acrum_x_uses: state.acrum_x_uses,
        }
    }
}

impl TrialResult {
    pub fn sliver_used(&self) -> u64 {
        self.attempt_count * SLIVER_PER_ATTEMPT
    }

    pub fn recovery_ticket_cost(&self) -> u64 {
        self.recovery_tickets_used * TICKETS_PER_RECOVERY
    }
}

impl fmt::Display for TrialResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Attempts:          {}", self.attempt_count)?;
        writeln!(f, "  Sliver:            {}", format_thousands(self.sliver_used()))?;
        writeln!(
            f,
            "  Recovery Tickets:  {}",
            format_thousands(self.recovery_ticket_cost())
        )?;
        writeln!(f, "  Acrum V Used:      {}", self.acrum_v_uses)?;
        write!(f, "  Acrum X Used:      {}", self.acrum_x_uses)
    }
}

/// Group digits in threes with commas, e.g. 1234567 -> "1,234,567".
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
