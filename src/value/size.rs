//! Byte sizes with a `kb`/`mb`/`gb`/`tb` suffix.

use std::fmt;
use std::str::FromStr;

use super::{FlagValue, ValueError, ValueKind};

/// Units in ascending order with their power of 1024.
const UNITS: [(&str, u32); 4] = [("kb", 1), ("mb", 2), ("gb", 3), ("tb", 4)];

/// Exponent used when no unit is given (megabytes).
const DEFAULT_EXPONENT: u32 = 2;

/// A byte count parsed from `<number>[kb|mb|gb|tb]`.
///
/// The unit is case-insensitive; a bare number is read as megabytes.
///
/// ```
/// use flagstack::value::Size;
///
/// assert_eq!("2kb".parse::<Size>().unwrap().bytes(), 2048);
/// assert_eq!("2".parse::<Size>().unwrap().bytes(), 2 * 1024 * 1024);
/// assert!("2kilobytes".parse::<Size>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Size(u64);

impl Size {
    /// Number of bytes.
    #[must_use]
    pub const fn bytes(self) -> u64 {
        self.0
    }
}

impl FromStr for Size {
    type Err = ValueError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let lowered = raw.trim().to_lowercase();

        if let Ok(magnitude) = lowered.parse::<i64>() {
            return scale(raw, magnitude, DEFAULT_EXPONENT);
        }

        let split = lowered
            .len()
            .checked_sub(2)
            .filter(|&index| index > 0 && lowered.is_char_boundary(index))
            .ok_or_else(|| ValueError::malformed(raw, "expected <number>[kb|mb|gb|tb]"))?;
        let (number, unit) = lowered.split_at(split);

        let magnitude = number
            .parse::<i64>()
            .map_err(|e| ValueError::malformed(raw, e.to_string()))?;
        if magnitude < 0 {
            return Err(ValueError::out_of_range(raw, "size cannot be negative"));
        }

        let exponent = UNITS
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|&(_, exponent)| exponent)
            .ok_or_else(|| ValueError::malformed(raw, format!("unsupported unit '{unit}'")))?;

        scale(raw, magnitude, exponent)
    }
}

fn scale(raw: &str, magnitude: i64, exponent: u32) -> Result<Size, ValueError> {
    let magnitude =
        u64::try_from(magnitude).map_err(|_| ValueError::out_of_range(raw, "size cannot be negative"))?;
    magnitude
        .checked_mul(1024_u64.pow(exponent))
        .map(Size)
        .ok_or_else(|| ValueError::out_of_range(raw, "size overflows 64 bits"))
}

impl fmt::Display for Size {
    /// Uses the largest unit dividing the count exactly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("0");
        }
        for &(name, exponent) in UNITS.iter().rev() {
            let factor = 1024_u64.pow(exponent);
            if self.0 % factor == 0 {
                return write!(f, "{}{name}", self.0 / factor);
            }
        }
        write!(f, "{}", self.0)
    }
}

impl FlagValue for Size {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        *self = raw.parse()?;
        Ok(())
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn kind(&self) -> ValueKind {
        ValueKind::Single("size")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_are_powers_of_1024() {
        assert_eq!("2kb".parse::<Size>().unwrap().bytes(), 2048);
        assert_eq!("3MB".parse::<Size>().unwrap().bytes(), 3 * 1024 * 1024);
        assert_eq!("1Gb".parse::<Size>().unwrap().bytes(), 1 << 30);
        assert_eq!("1tb".parse::<Size>().unwrap().bytes(), 1 << 40);
    }

    #[test]
    fn bare_number_defaults_to_megabytes() {
        assert_eq!("2".parse::<Size>().unwrap().bytes(), 2_097_152);
    }

    #[test]
    fn unknown_unit_is_malformed() {
        let err = "2kilobytes".parse::<Size>().unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("parse error"));
        assert!("2pb".parse::<Size>().unwrap_err().is_malformed());
        assert!("kb".parse::<Size>().unwrap_err().is_malformed());
    }

    #[test]
    fn negative_is_out_of_range() {
        assert!("-2".parse::<Size>().unwrap_err().is_out_of_range());
        assert!("-2kb".parse::<Size>().unwrap_err().is_out_of_range());
    }

    #[test]
    fn overflow_is_out_of_range() {
        assert!("99999999999tb".parse::<Size>().unwrap_err().is_out_of_range());
    }

    #[test]
    fn render_uses_largest_exact_unit() {
        assert_eq!("2048kb".parse::<Size>().unwrap().render(), "2mb");
        assert_eq!("3kb".parse::<Size>().unwrap().render(), "3kb");
        assert_eq!(Size::default().render(), "0");
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut size = Size::default();
        size.set("1kb").unwrap();
        size.set("2kb").unwrap();
        assert_eq!(size.bytes(), 2048);
    }
}
