//! Bounded stats and clamping.
//!
//! Hunger, happiness, sickness and training all live in `[0, 100]`. The only
//! way to change a [`Stat`] is through [`Stat::raise`] and [`Stat::lower`],
//! which route through [`clamp_up`] and [`clamp_down`]. Age and weight are
//! plain `u32` counters floored at zero by saturating arithmetic.

/// Lowest value a bounded stat can hold.
pub const STAT_MIN: u8 = 0;

/// Highest value a bounded stat can hold.
pub const STAT_MAX: u8 = 100;

/// Raise `value` to `lower` if it falls below it.
pub const fn clamp_up(value: i64, lower: i64) -> i64 {
    if value < lower { lower } else { value }
}

/// Cut `value` down to `upper` if it exceeds it.
pub const fn clamp_down(value: i64, upper: i64) -> i64 {
    if value > upper { upper } else { value }
}

/// A stat value guaranteed to lie in `[STAT_MIN, STAT_MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Stat(u8);

impl Stat {
    /// Create a stat, clamping `value` into range.
    pub fn new(value: u32) -> Self {
        Self::from_wide(i64::from(value))
    }

    /// Current value.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Add `amount`, stopping at [`STAT_MAX`].
    pub fn raise(&mut self, amount: u32) {
        let raised = i64::from(self.0).saturating_add(i64::from(amount));
        *self = Self::from_wide(raised);
    }

    /// Subtract `amount`, stopping at [`STAT_MIN`].
    pub fn lower(&mut self, amount: u32) {
        let lowered = i64::from(self.0).saturating_sub(i64::from(amount));
        *self = Self::from_wide(lowered);
    }

    /// Whether the stat sits at [`STAT_MAX`].
    pub const fn is_max(self) -> bool {
        self.0 >= STAT_MAX
    }

    /// Whether the stat sits at [`STAT_MIN`].
    pub const fn is_min(self) -> bool {
        self.0 <= STAT_MIN
    }

    fn from_wide(value: i64) -> Self {
        let clamped = clamp_down(clamp_up(value, i64::from(STAT_MIN)), i64::from(STAT_MAX));
        Self(u8::try_from(clamped).unwrap_or(STAT_MAX))
    }
}

impl core::fmt::Display for Stat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four bounded needs of a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vitals {
    /// Hunger. Death at [`STAT_MAX`].
    pub hunger: Stat,
    /// Happiness. Death at [`STAT_MIN`].
    pub happiness: Stat,
    /// Sickness. Death at [`STAT_MAX`].
    pub sickness: Stat,
    /// Training. Never fatal.
    pub training: Stat,
}

impl Vitals {
    /// Build vitals from raw values, clamping each into range.
    pub fn new(hunger: u32, happiness: u32, sickness: u32, training: u32) -> Self {
        Self {
            hunger: Stat::new(hunger),
            happiness: Stat::new(happiness),
            sickness: Stat::new(sickness),
            training: Stat::new(training),
        }
    }

    /// Whether every stat is within `[STAT_MIN, STAT_MAX]`.
    pub const fn in_range(&self) -> bool {
        self.hunger.value() <= STAT_MAX
            && self.happiness.value() <= STAT_MAX
            && self.sickness.value() <= STAT_MAX
            && self.training.value() <= STAT_MAX
    }
}
