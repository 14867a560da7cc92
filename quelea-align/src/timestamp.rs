//! SRT-style timestamp parsing.
//!
//! Converts `HH:MM:SS.mmm` (or comma-form `HH:MM:SS,mmm`) strings into
//! floating-point seconds.

use crate::error::TimestampError;

/// Parse an SRT-style timestamp into seconds.
///
/// Accepts comma or dot as the fractional separator; the comma is normalized
/// to a dot before parsing. The fractional part is required and carries at
/// most microsecond precision, matching the fixed-width `HH:MM:SS.ffffff`
/// form. Hours, minutes, and seconds are validated to 0-23 / 0-59 / 0-59.
pub fn parse(timestamp: &str) -> Result<f64, TimestampError> {
    let normalized = timestamp.replace(',', ".");

    let mut fields = normalized.split(':');
    let (Some(hours), Some(minutes), Some(seconds), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(TimestampError::FieldCount {
            input: timestamp.to_string(),
        });
    };

    let hours = parse_component(timestamp, hours, 23)?;
    let minutes = parse_component(timestamp, minutes, 59)?;

    let (whole, fraction) = seconds
        .split_once('.')
        .ok_or_else(|| TimestampError::MissingFraction {
            input: timestamp.to_string(),
        })?;

    let whole = parse_component(timestamp, whole, 59)?;
    let micros = parse_fraction(timestamp, fraction)?;

    Ok(f64::from(hours) * 3600.0
        + f64::from(minutes) * 60.0
        + f64::from(whole)
        + f64::from(micros) / 1e6)
}

/// Parse a timestamp, substituting `0.0` on failure.
///
/// Malformed timestamps are logged and collapse to a zero-second boundary
/// instead of failing the run.
pub fn parse_lossy(timestamp: &str) -> f64 {
    match parse(timestamp) {
        Ok(secs) => secs,
        Err(error) => {
            tracing::warn!(%error, timestamp, "malformed timestamp, substituting 0.0");
            0.0
        }
    }
}

/// Parse a 1-2 digit component and validate its range.
fn parse_component(input: &str, component: &str, max: u32) -> Result<u32, TimestampError> {
    if component.is_empty() || component.len() > 2 {
        return Err(invalid_component(input, component));
    }

    let value = component
        .parse::<u32>()
        .map_err(|_| invalid_component(input, component))?;

    if value > max {
        return Err(TimestampError::OutOfRange {
            input: input.to_string(),
            value,
            max,
        });
    }

    Ok(value)
}

/// Parse a 1-6 digit fraction, scaled to microseconds.
fn parse_fraction(input: &str, fraction: &str) -> Result<u32, TimestampError> {
    if fraction.is_empty() || fraction.len() > 6 {
        return Err(invalid_component(input, fraction));
    }

    let value = fraction
        .parse::<u32>()
        .map_err(|_| invalid_component(input, fraction))?;

    Ok(value * 10u32.pow(6 - fraction.len() as u32))
}

fn invalid_component(input: &str, component: &str) -> TimestampError {
    TimestampError::InvalidComponent {
        input: input.to_string(),
        component: component.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dot_form() {
        let secs = parse("00:00:01.500").unwrap();
        assert!((secs - 1.5).abs() < 1e-9);
    }

    #[test]
    fn parses_comma_form() {
        let secs = parse("00:00:15,000").unwrap();
        assert!((secs - 15.0).abs() < 1e-9);
    }

    #[test]
    fn parses_full_precision() {
        let secs = parse("01:02:03.400000").unwrap();
        assert!((secs - 3723.4).abs() < 1e-9);
    }

    #[test]
    fn parses_short_fraction() {
        // "4.2" and "4.200000" are the same instant
        let secs = parse("00:00:04.2").unwrap();
        assert!((secs - 4.2).abs() < 1e-9);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("garbage").is_err());
    }

    #[test]
    fn rejects_missing_fraction() {
        assert!(matches!(
            parse("00:00:05"),
            Err(TimestampError::MissingFraction { .. })
        ));
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(matches!(
            parse("00:05.000"),
            Err(TimestampError::FieldCount { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_hours() {
        assert!(matches!(
            parse("25:00:00.000"),
            Err(TimestampError::OutOfRange { value: 25, .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_minutes() {
        assert!(matches!(
            parse("00:61:00.000"),
            Err(TimestampError::OutOfRange { value: 61, .. })
        ));
    }

    #[test]
    fn rejects_overlong_fraction() {
        assert!(parse("00:00:00.1234567").is_err());
    }

    #[test]
    fn rejects_non_numeric_component() {
        assert!(matches!(
            parse("00:xx:00.000"),
            Err(TimestampError::InvalidComponent { .. })
        ));
    }

    #[test]
    fn lossy_substitutes_zero() {
        assert_eq!(parse_lossy("garbage"), 0.0);
        assert!((parse_lossy("00:00:01.500") - 1.5).abs() < 1e-9);
    }
}
