//! Cross-tabulation of per-organization fact rows by group and product.
//!
//! Every row lands in four buckets: its own `(group, product)` cell, the
//! `all` group for its product, its group's `total`, and `(all, total)`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const ALL_GROUPS: &str = "all";
pub const ALL_PRODUCTS: &str = "total";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactRow {
    pub org: String,
    pub group: String,
    pub product: String,
    pub value: f64,
}

impl FactRow {
    pub fn new(
        org: impl Into<String>,
        group: impl Into<String>,
        product: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            org: org.into(),
            group: group.into(),
            product: product.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GroupKey {
    All,
    Code(String),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProductKey {
    Total,
    Code(String),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_GROUPS),
            Self::Code(code) => f.write_str(code),
        }
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Total => f.write_str(ALL_PRODUCTS),
            Self::Code(code) => f.write_str(code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BucketKey {
    pub group: GroupKey,
    pub product: ProductKey,
}

impl BucketKey {
    pub fn new(group: &str, product: &str) -> Self {
        Self {
            group: GroupKey::Code(group.to_string()),
            product: ProductKey::Code(product.to_string()),
        }
    }

    pub fn all_total() -> Self {
        Self {
            group: GroupKey::All,
            product: ProductKey::Total,
        }
    }

    pub fn all(product: &str) -> Self {
        Self {
            group: GroupKey::All,
            product: ProductKey::Code(product.to_string()),
        }
    }

    pub fn total(group: &str) -> Self {
        Self {
            group: GroupKey::Code(group.to_string()),
            product: ProductKey::Total,
        }
    }

    fn rollups_for(row: &FactRow) -> [BucketKey; 4] {
        [
            Self::new(&row.group, &row.product),
            Self::all(&row.product),
            Self::total(&row.group),
            Self::all_total(),
        ]
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group, self.product)
    }
}

/// Sums fact rows into every `(group, product)` cell plus its marginals.
///
/// Duplicate `(org, product)` rows are added together, not replaced.
pub fn aggregate_to_group_and_all(rows: &[FactRow]) -> BTreeMap<BucketKey, f64> {
    let mut buckets: BTreeMap<BucketKey, f64> = BTreeMap::new();

    for row in rows {
        for key in BucketKey::rollups_for(row) {
            *buckets.entry(key).or_insert(0.0) += row.value;
        }
    }

    buckets
}
