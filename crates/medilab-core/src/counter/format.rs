//! Display formats for counter values

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How a counter renders its value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayFormat {
    /// Bare integer: `1985`
    #[default]
    Plain,
    /// Thousands-grouped integer with a trailing plus: `500,000+`
    CommaPlus,
    /// Value in tenths of a percent: `998` renders as `99.8%`
    PercentTenths,
}

impl DisplayFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayFormat::Plain => "plain",
            DisplayFormat::CommaPlus => "comma-plus",
            DisplayFormat::PercentTenths => "percent-tenths",
        }
    }

    /// Text for an in-flight frame
    ///
    /// Intermediate frames skip grouping and the plus suffix, but percent
    /// counters are always shown divided by ten.
    pub fn render_frame(&self, value: u64) -> String {
        match self {
            DisplayFormat::Plain | DisplayFormat::CommaPlus => value.to_string(),
            DisplayFormat::PercentTenths => tenths_percent(value),
        }
    }

    /// Canonical text for the terminal frame
    pub fn render_final(&self, value: u64) -> String {
        match self {
            DisplayFormat::Plain => value.to_string(),
            DisplayFormat::CommaPlus => format!("{}+", group_thousands(value)),
            DisplayFormat::PercentTenths => tenths_percent(value),
        }
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(DisplayFormat::Plain),
            "comma-plus" | "comma_plus" => Ok(DisplayFormat::CommaPlus),
            "percent-tenths" | "percent_tenths" => Ok(DisplayFormat::PercentTenths),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Group digits in threes with commas: 1234567 -> "1,234,567"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One decimal place of `value / 10` plus a percent sign
///
/// Integer arithmetic keeps this exact for every `u64`.
fn tenths_percent(value: u64) -> String {
    format!("{}.{}%", value / 10, value % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(500_000), "500,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_render_final() {
        assert_eq!(DisplayFormat::Plain.render_final(1985), "1985");
        assert_eq!(DisplayFormat::CommaPlus.render_final(500_000), "500,000+");
        assert_eq!(DisplayFormat::PercentTenths.render_final(998), "99.8%");
        assert_eq!(DisplayFormat::PercentTenths.render_final(5), "0.5%");
        assert_eq!(DisplayFormat::PercentTenths.render_final(1000), "100.0%");
    }

    #[test]
    fn test_render_frame_skips_grouping() {
        assert_eq!(DisplayFormat::CommaPlus.render_frame(123_456), "123456");
        assert_eq!(DisplayFormat::Plain.render_frame(42), "42");
        assert_eq!(DisplayFormat::PercentTenths.render_frame(512), "51.2%");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("plain".parse::<DisplayFormat>().unwrap(), DisplayFormat::Plain);
        assert_eq!(
            "Comma-Plus".parse::<DisplayFormat>().unwrap(),
            DisplayFormat::CommaPlus
        );
        assert_eq!(
            "percent_tenths".parse::<DisplayFormat>().unwrap(),
            DisplayFormat::PercentTenths
        );
        assert!(matches!(
            "currency".parse::<DisplayFormat>(),
            Err(Error::UnknownFormat(_))
        ));
    }
}
