//! Duration grammar: humantime units (including `d`), bare integers are seconds.

use std::time::Duration;

use super::ValueError;

/// Parses `90s`, `1h30m`, `2d`, `100ms` or a bare number of seconds.
///
/// # Errors
///
/// Returns [`ValueError::Malformed`] for unknown units or syntax and
/// [`ValueError::OutOfRange`] when a bare integer does not fit.
pub fn parse(raw: &str) -> Result<Duration, ValueError> {
    let trimmed = raw.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        let secs = trimmed
            .parse::<u64>()
            .map_err(|e| ValueError::out_of_range(raw, e.to_string()))?;
        return Ok(Duration::from_secs(secs));
    }
    humantime::parse_duration(trimmed).map_err(|e| ValueError::malformed(raw, e.to_string()))
}

/// Formats a duration so that [`parse`] reads it back unchanged.
#[must_use]
pub fn format(duration: Duration) -> String {
    humantime::format_duration(duration)
        .to_string()
        .replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_unit() {
        assert_eq!(parse("2d").unwrap(), Duration::from_secs(2 * 24 * 3600));
    }

    #[test]
    fn bare_integer_is_seconds() {
        assert_eq!(parse("2").unwrap(), Duration::from_secs(2));
    }

    #[test]
    fn compound_units() {
        assert_eq!(parse("1h30m").unwrap(), Duration::from_secs(90 * 60));
        assert_eq!(parse("100ms").unwrap(), Duration::from_millis(100));
    }

    #[test]
    fn unknown_unit_is_malformed() {
        assert!(parse("1x").unwrap_err().is_malformed());
        assert!(parse("").unwrap_err().is_malformed());
    }

    #[test]
    fn format_round_trips() {
        for duration in [
            Duration::ZERO,
            Duration::from_secs(45 * 60),
            Duration::from_secs(90 * 60),
            Duration::from_millis(1500),
        ] {
            assert_eq!(parse(&format(duration)).unwrap(), duration);
        }
    }
}
