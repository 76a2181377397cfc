use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose effect lifecycle while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Fraction of a stat card that has to be on screen before it counts up.
pub const VIEWPORT_THRESHOLD: f64 = 0.6;

pub const COUNT_UP_DURATION_MS: f64 = 1100.0;

/// Header switches to its compact look once the page scrolls past this.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

pub const FADE_IN_MS: u32 = 800;
pub const TYPE_CHAR_MS: u32 = 100;
pub const STAY_MS: u32 = 3500;
pub const FADE_OUT_MS: u32 = 500;
