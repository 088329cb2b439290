//! Level table generation

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::ops::RangeInclusive;

use crate::config::ComponentSpec;

/// Time needed to reach `level` for a component with the given base time.
///
/// `base_time / (level / 10 + 1)`, in floating point throughout. Level -10
/// divides by zero and yields an infinite (or NaN for a zero base) value.
pub fn time_elapsed(base_time: i32, level: i32) -> f64 {
    f64::from(base_time) / ((f64::from(level) / 10.0) + 1.0)
}

/// One row of a level table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelEntry {
    #[serde(rename = "LEVEL")]
    pub level: i32,
    #[serde(rename = "TIME_ELAPSED", serialize_with = "serialize_time")]
    pub time_elapsed: f64,
}

impl LevelEntry {
    pub fn new(level: i32, base_time: i32) -> Self {
        Self {
            level,
            time_elapsed: time_elapsed(base_time, level),
        }
    }
}

// JSON numbers cannot carry non-finite values
fn serialize_time<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_sign_positive() {
        serializer.serialize_str("Infinity")
    } else {
        serializer.serialize_str("-Infinity")
    }
}

/// Every level of one component, ascending.
///
/// Only the range is stored; entries are computed on demand so any `i32`
/// range costs constant memory. Serializes as an object keyed by the
/// decimal level, in level order.
#[derive(Debug, Clone, Copy)]
pub struct LevelTable {
    base_time: i32,
    min_level: i32,
    max_level: i32,
}

impl LevelTable {
    pub fn base_time(&self) -> i32 {
        self.base_time
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let count = i64::from(self.max_level) - i64::from(self.min_level) + 1;
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.max_level < self.min_level
    }

    pub fn iter(&self) -> Levels {
        Levels {
            base_time: self.base_time,
            range: self.min_level..=self.max_level,
        }
    }

    pub fn first(&self) -> Option<LevelEntry> {
        self.get(self.min_level)
    }

    pub fn last(&self) -> Option<LevelEntry> {
        self.get(self.max_level)
    }

    pub fn get(&self, level: i32) -> Option<LevelEntry> {
        (self.min_level..=self.max_level)
            .contains(&level)
            .then(|| LevelEntry::new(level, self.base_time))
    }
}

// All empty tables are equal regardless of the inverted bounds they came from
impl PartialEq for LevelTable {
    fn eq(&self, other: &Self) -> bool {
        (self.is_empty() && other.is_empty())
            || (self.base_time == other.base_time
                && self.min_level == other.min_level
                && self.max_level == other.max_level)
    }
}

/// Iterator over the entries of a `LevelTable`
#[derive(Debug, Clone)]
pub struct Levels {
    base_time: i32,
    range: RangeInclusive<i32>,
}

impl Iterator for Levels {
    type Item = LevelEntry;

    fn next(&mut self) -> Option<LevelEntry> {
        self.range
            .next()
            .map(|level| LevelEntry::new(level, self.base_time))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for Levels {
    fn next_back(&mut self) -> Option<LevelEntry> {
        self.range
            .next_back()
            .map(|level| LevelEntry::new(level, self.base_time))
    }
}

impl<'a> IntoIterator for &'a LevelTable {
    type Item = LevelEntry;
    type IntoIter = Levels;

    fn into_iter(self) -> Levels {
        self.iter()
    }
}

impl Serialize for LevelTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for entry in self {
            map.serialize_entry(&entry.level.to_string(), &entry)?;
        }
        map.end()
    }
}

/// Build the table for every level in `min_level..=max_level`.
///
/// An inverted range gives an empty table.
pub fn generate(base_time: i32, min_level: i32, max_level: i32) -> LevelTable {
    LevelTable {
        base_time,
        min_level,
        max_level,
    }
}

/// Build the table for a parsed component
pub fn generate_for(spec: &ComponentSpec) -> LevelTable {
    generate(spec.base_time, spec.min_level, spec.max_level)
}
