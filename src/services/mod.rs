use crate::domain::Entry;
use crate::error::BuildResult;
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

pub mod build;
pub mod contentful;

/// Anything that can hand back the current entry set for a query. The
/// returned sequence is the complete result, already in `query.order`.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch_entries(&self, query: &ContentQuery) -> BuildResult<Vec<Entry>>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentQuery {
    pub content_type: String,
    pub order: SortOrder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A sort field plus direction, written the way the delivery API expects it:
/// `fields.date` ascending, `-fields.date` descending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Ascending => write!(f, "{}", self.field),
            SortDirection::Descending => write!(f, "-{}", self.field),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        let order = match raw.strip_prefix('-') {
            Some(field) => Self::descending(field),
            None => Self::ascending(raw),
        };

        if order.field.is_empty() || order.field.starts_with('-') {
            return Err(format!("{raw:?} is not a sort field"));
        }
        Ok(order)
    }
}
