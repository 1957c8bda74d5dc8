//! Immutable capital trajectory indexed by period

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Capital values for periods `0..=N`
///
/// Index 0 is the starting capital verbatim; index `t` is the balance after
/// period `t`. Never empty.
///
/// Serializes as a plain array. Overflowed entries are written as the
/// strings `"inf"`, `"-inf"` and `"NaN"` so they survive formats (JSON) that
/// have no literal for them.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    values: Vec<f64>,
}

impl Trajectory {
    pub(crate) fn from_values(values: Vec<f64>) -> Self {
        debug_assert!(!values.is_empty(), "trajectory must contain period 0");
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of entries (`periods() + 1`)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of simulated periods `N`
    pub fn periods(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    pub fn get(&self, period: usize) -> Option<f64> {
        self.values.get(period).copied()
    }

    /// Value at period 0
    pub fn start(&self) -> f64 {
        self.values.first().copied().unwrap_or(0.0)
    }

    /// Value at period N
    pub fn final_value(&self) -> f64 {
        self.values.last().copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// True if any entry overflowed to `inf` or became `NaN`
    pub fn has_non_finite(&self) -> bool {
        self.values.iter().any(|v| !v.is_finite())
    }
}

struct Entry(f64);

impl Serialize for Entry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.is_finite() {
            serializer.serialize_f64(value)
        } else if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if value > 0.0 {
            serializer.serialize_str("inf")
        } else {
            serializer.serialize_str("-inf")
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Number(f64),
    Token(String),
}

impl RawEntry {
    fn into_value(self) -> Result<f64, String> {
        match self {
            RawEntry::Number(value) => Ok(value),
            RawEntry::Token(token) => match token.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                "NaN" => Ok(f64::NAN),
                other => Err(format!("invalid trajectory entry: {other:?}")),
            },
        }
    }
}

impl Serialize for Trajectory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values.iter().map(|&value| Entry(value)))
    }
}

impl<'de> Deserialize<'de> for Trajectory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<RawEntry>::deserialize(deserializer)?
            .into_iter()
            .map(RawEntry::into_value)
            .collect::<Result<Vec<f64>, String>>()
            .map_err(de::Error::custom)?;
        if values.is_empty() {
            return Err(de::Error::custom("trajectory must contain period 0"));
        }
        Ok(Self { values })
    }
}

impl Index<usize> for Trajectory {
    type Output = f64;

    fn index(&self, period: usize) -> &f64 {
        &self.values[period]
    }
}
