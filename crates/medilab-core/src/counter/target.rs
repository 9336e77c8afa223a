//! Typed counter description, parsed once at the element boundary

use serde::{Deserialize, Serialize};

use super::format::DisplayFormat;
use crate::{Error, Result};

/// Raw string attributes read from a counter element
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterAttributes<'a> {
    /// `data-target`, e.g. `"500000+"`, `"998%"` or `"1985"`
    pub data_target: Option<&'a str>,
    /// `data-format` hint: `plain`, `comma-plus` or `percent-tenths`
    pub data_format: Option<&'a str>,
    /// The element's initial text content
    pub text_content: Option<&'a str>,
}

impl<'a> CounterAttributes<'a> {
    pub fn with_target(target: &'a str) -> Self {
        Self {
            data_target: Some(target),
            ..Default::default()
        }
    }
}

/// What a counter counts to and how it is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSpec {
    pub target_value: u64,
    pub display_format: DisplayFormat,
}

impl CounterSpec {
    pub fn new(target_value: u64, display_format: DisplayFormat) -> Self {
        Self {
            target_value,
            display_format,
        }
    }

    /// Build a spec from element attributes
    ///
    /// The target is the leading integer of `data-target`, falling back to
    /// the text content when the attribute is missing, malformed or zero.
    /// Anything unparseable becomes 0. An explicit format hint wins over the
    /// suffix of `data-target` (`+` for grouped, `%` for tenths).
    pub fn from_attributes(attrs: CounterAttributes<'_>) -> Self {
        let target_value = match attrs.data_target.map(parse_leading_int) {
            Some(Ok(value)) if value > 0 => value,
            from_attr => match attrs.text_content.map(parse_leading_int) {
                Some(Ok(value)) => value,
                from_text => {
                    // An explicit "0" is a real target, not a parse failure
                    if !matches!(from_attr, Some(Ok(0))) {
                        if let Some(Err(e)) = from_text.or(from_attr) {
                            tracing::warn!("{}, counting to 0", e);
                        }
                    }
                    0
                }
            },
        };

        let hinted = attrs.data_format.and_then(|hint| match hint.parse::<DisplayFormat>() {
            Ok(format) => Some(format),
            Err(e) => {
                tracing::warn!("Ignoring format hint: {}", e);
                None
            }
        });
        let display_format = hinted
            .or_else(|| attrs.data_target.map(infer_format))
            .unwrap_or_default();

        Self::new(target_value, display_format)
    }
}

/// Leading-integer parse in the spirit of `parseInt`
///
/// Leading whitespace and a `+` sign are skipped; parsing stops at the first
/// non-digit. No digits, a negative sign or overflow is malformed.
pub fn parse_leading_int(raw: &str) -> Result<u64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end]
        .parse::<u64>()
        .map_err(|_| Error::MalformedTarget(raw.to_string()))
}

fn infer_format(raw: &str) -> DisplayFormat {
    match raw.trim_end().chars().last() {
        Some('+') => DisplayFormat::CommaPlus,
        Some('%') => DisplayFormat::PercentTenths,
        _ => DisplayFormat::Plain,
    }
}
