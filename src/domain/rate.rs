//! Rate - Sim Rate Classification and Formatting

/// Display tier that selects the overlay color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayTier {
    /// Slower than real-time
    Slow,
    /// Real-time
    Normal,
    /// Faster than real-time
    Fast,
}

/// Map a sim rate to its display tier.
///
/// Zero, negative and NaN rates are clamped to [`DisplayTier::Slow`].
pub fn classify(value: f64) -> DisplayTier {
    if value.is_nan() || value < 1.0 {
        DisplayTier::Slow
    } else if value > 1.0 {
        DisplayTier::Fast
    } else {
        DisplayTier::Normal
    }
}

/// Render a rate for the overlay: two decimals at most, one at least.
pub fn format_rate(value: f64) -> String {
    let mut text = format!("{value:.2}");
    while text.ends_with('0') && !text.ends_with(".0") {
        text.pop();
    }
    text.push('x');
    text
}

/// Placeholder shown while disconnected
pub const NO_RATE_TEXT: &str = "-- x";
