use crate::config::MIN_SPEED_MS;

/// Returns the level reached after `foods_eaten` foods.
///
/// Level starts at 1 and increases by one every `foods_per_level` foods.
#[must_use]
pub fn level_for(foods_eaten: u32, foods_per_level: u32) -> u32 {
    foods_eaten / foods_per_level + 1
}

/// Returns the tick interval in milliseconds for `level`.
///
/// Each level past the first shaves `increment_ms` off the interval, with a
/// hard floor at [`MIN_SPEED_MS`] to keep the game playable.
#[must_use]
pub fn speed_for(level: u32, initial_ms: u64, increment_ms: u64) -> u64 {
    let penalty = u64::from(level.saturating_sub(1)) * increment_ms;
    initial_ms.saturating_sub(penalty).max(MIN_SPEED_MS)
}

/// Returns the per-food score multiplier for `level`.
#[must_use]
pub fn score_multiplier(level: u32) -> u32 {
    level
}
