//! Boundary parsing for collection point submissions and filters.
//!
//! Clients send the accepted items of a point as a comma-joined string
//! (`"1,3,5"`) or as a JSON array. Both forms are turned into an [`ItemIds`]
//! set here, once, before any storage access happens.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// A non-empty set of distinct item identifiers, in first-seen order.
///
/// The only constructors are [`ItemIds::parse`] and [`ItemIds::from_ids`],
/// so holding a value proves the list was validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DbId>", into = "Vec<DbId>")]
pub struct ItemIds(Vec<DbId>);

impl ItemIds {
    /// Parse a comma-delimited list such as `"1, 3,5"`.
    ///
    /// Whitespace around entries is ignored. Empty entries, non-integer
    /// entries and an empty list are rejected. Duplicates are collapsed.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.trim().is_empty() {
            return Err(empty_list_error());
        }

        let ids = raw
            .split(',')
            .map(|part| {
                let part = part.trim();
                if part.is_empty() {
                    return Err(CoreError::Validation(
                        "Item list contains an empty entry".to_string(),
                    ));
                }
                part.parse::<DbId>().map_err(|_| {
                    CoreError::Validation(format!("Item id '{part}' is not a valid integer"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_ids(ids)
    }

    /// Build a set from already-typed ids, collapsing duplicates.
    pub fn from_ids(ids: Vec<DbId>) -> Result<Self, CoreError> {
        if ids.is_empty() {
            return Err(empty_list_error());
        }

        let mut distinct = Vec::with_capacity(ids.len());
        for id in ids {
            if !distinct.contains(&id) {
                distinct.push(id);
            }
        }
        Ok(Self(distinct))
    }

    pub fn as_slice(&self) -> &[DbId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `false` for every constructed value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<DbId>> for ItemIds {
    type Error = CoreError;

    fn try_from(ids: Vec<DbId>) -> Result<Self, Self::Error> {
        Self::from_ids(ids)
    }
}

impl From<ItemIds> for Vec<DbId> {
    fn from(ids: ItemIds) -> Self {
        ids.0
    }
}

fn empty_list_error() -> CoreError {
    CoreError::Validation("At least one item must be selected".to_string())
}

/// Parse a coordinate submitted as text.
///
/// Only the number format is checked; range checks are left to clients.
pub fn parse_coordinate(field: &'static str, raw: &str) -> Result<f64, CoreError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| CoreError::Validation(format!("{field} must be a number")))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoreError::Validation(format!("{field} must be a finite number")))
    }
}
