//! Sort stage.
//!
//! A [`SortSpec`] names a field and a direction. Records expose a typed
//! [`SortKey`] per field and the comparator dispatches on the key kind:
//!
//! - `Text`: case-insensitive order, code point order as tie-break
//! - `Date`: chronological; missing dates go last ascending and first descending
//! - `Rank`: numeric rank (see [`crate::model::LEVEL_RANKS`])
//!
//! Fields a record does not know, or keys of different kinds, compare equal. The
//! sort itself is stable so equal records keep their input order.

use crate::model::{Record, SortKey};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::desc("date")
    }
}

/// Reads `"<field>_<direction>"`, splitting on the first underscore.
///
/// Never fails. Without an underscore the whole string is the field, and any
/// direction other than `asc` means `desc`. Unknown fields sort as a no-op.
impl From<&str> for SortSpec {
    fn from(s: &str) -> Self {
        let (field, direction) = s.split_once('_').unwrap_or((s, ""));
        let direction = match direction {
            "asc" => SortDirection::Asc,
            _ => SortDirection::Desc,
        };
        Self::new(field, direction)
    }
}

impl FromStr for SortSpec {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl std::fmt::Display for SortSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dir = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}_{}", self.field, dir)
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// Missing dates are not flipped with the direction: they trail under asc and lead
// under desc.
fn compare_dates(a: Option<NaiveDate>, b: Option<NaiveDate>, direction: SortDirection) -> Ordering {
    let asc = direction == SortDirection::Asc;
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => {
            if asc {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
        (Some(_), None) => {
            if asc {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
        (Some(a), Some(b)) => direction.apply(a.cmp(&b)),
    }
}

/// Comparator for one pair of records under `spec`.
pub fn compare<R: Record>(a: &R, b: &R, spec: &SortSpec) -> Ordering {
    match (a.sort_key(&spec.field), b.sort_key(&spec.field)) {
        (Some(SortKey::Text(x)), Some(SortKey::Text(y))) => spec.direction.apply(compare_text(x, y)),
        (Some(SortKey::Date(x)), Some(SortKey::Date(y))) => compare_dates(x, y, spec.direction),
        (Some(SortKey::Rank(x)), Some(SortKey::Rank(y))) => spec.direction.apply(x.cmp(&y)),
        _ => Ordering::Equal,
    }
}

/// Stable in-place sort.
pub fn sort<R: Record>(records: &mut [R], spec: &SortSpec) {
    records.sort_by(|a, b| compare(a, b, spec));
}
