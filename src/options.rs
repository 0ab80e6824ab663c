use std::str::FromStr;

/// Policy for data rows whose cell count does not match the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPolicy {
    /// Drop mismatched rows without raising an error. This is the default
    /// and the behaviour downstream consumers are expected to tolerate.
    Lenient,
    /// Fail the whole parse on the first mismatched row.
    Strict,
}

/// How itinerary day keys are compared when grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKeyMode {
    /// Day values are opaque strings: "1" and "01" are distinct groups.
    Literal,
    /// Group by the leading integer in the day value; values without a
    /// leading integer fall back to literal comparison.
    Numeric,
}

impl FromStr for DayKeyMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "literal" => Ok(Self::Literal),
            "numeric" => Ok(Self::Numeric),
            other => Err(format!("invalid day key mode: '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub row_policy: RowPolicy,
    pub day_key_mode: DayKeyMode,
    /// Label used for bare URLs that match no booking/map category.
    pub generic_link_label: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            row_policy: RowPolicy::Lenient,
            day_key_mode: DayKeyMode::Literal,
            generic_link_label: "🔗 Link".to_string(),
        }
    }
}
