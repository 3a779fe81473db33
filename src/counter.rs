//! Stat counter animation math.
//!
//! Stat labels arrive as display text like `"1,234"`, `"500+"`, or `"$2.5M"`.
//! The numeric target is pulled out of the text, counted up from zero over a
//! fixed duration, and each frame is rendered back with thousands separators.
//! Intermediate frames floor to whole numbers; the final frame shows the
//! exact target, fractional digits included.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Total animation time.
pub const DURATION_MS: f64 = 2000.0;

/// Frame interval, roughly one display frame.
pub const TICK_MS: u32 = 16;

/// Pull the numeric target out of a stat label.
///
/// Strips everything but digits and dots, then parses the longest numeric
/// prefix, so `"$2.5M"` yields 2.5 and `"v2.1.3"` yields 2.1. Returns `None`
/// when no digits remain.
#[must_use]
pub fn extract_target(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    parse_leading_float(&cleaned)
}

fn parse_leading_float(s: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        if c.is_ascii_digit() {
            seen_digit = true;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
        } else {
            break;
        }
        end = i + 1;
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse().ok()
}

/// One counter ramping from zero to its target.
#[derive(Clone, Copy, Debug)]
pub struct CountUp {
    target: f64,
}

impl CountUp {
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self { target: target.max(0.0) }
    }

    /// Value shown `elapsed_ms` into the animation.
    #[must_use]
    pub fn display_at(self, elapsed_ms: f64) -> f64 {
        if elapsed_ms >= DURATION_MS {
            return self.target;
        }
        (self.target * (elapsed_ms / DURATION_MS).max(0.0))
            .floor()
            .min(self.target)
    }

    /// Whether the animation has landed on the target.
    #[must_use]
    pub fn done(self, elapsed_ms: f64) -> bool {
        elapsed_ms >= DURATION_MS
    }

    #[must_use]
    pub fn target(self) -> f64 {
        self.target
    }
}

/// Render a counter value with comma separators, like `1,234` or `2.5`.
///
/// Fractional digits are kept to at most three, with trailing zeros dropped.
#[must_use]
pub fn format_value(value: f64) -> String {
    let fixed = format!("{value:.3}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let grouped = group_thousands(int_part);
    if frac.is_empty() {
        grouped
    } else {
        format!("{grouped}.{frac}")
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.char_indices() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
