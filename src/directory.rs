use crate::crosstab::FactRow;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub group: String,
}

/// The known organizations and the group each one reports under.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganizationDirectory {
    pub organizations: Vec<Organization>,
}

impl OrganizationDirectory {
    pub fn new(organizations: Vec<Organization>) -> Self {
        Self { organizations }
    }

    pub fn from_pairs<I, S, G>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, G)>,
        S: Into<String>,
        G: Into<String>,
    {
        let organizations = pairs
            .into_iter()
            .map(|(id, group)| Organization {
                id: id.into(),
                group: group.into(),
            })
            .collect();
        Self { organizations }
    }

    pub fn group_of(&self, org: &str) -> Option<&str> {
        self.organizations
            .iter()
            .find(|o| o.id == org)
            .map(|o| o.group.as_str())
    }

    /// Organization ids per group, sorted.
    pub fn groups(&self) -> BTreeMap<String, Vec<String>> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for org in &self.organizations {
            groups
                .entry(org.group.clone())
                .or_default()
                .push(org.id.clone());
        }
        for members in groups.values_mut() {
            members.sort();
        }
        groups
    }

    /// Joins `(org, product, value)` triples with each org's group.
    ///
    /// Rows for organizations missing from the directory are dropped.
    pub fn fact_rows<'a, I>(&self, values: I) -> Vec<FactRow>
    where
        I: IntoIterator<Item = (&'a str, &'a str, f64)>,
    {
        let mut rows = Vec::new();
        for (org, product, value) in values {
            match self.group_of(org) {
                Some(group) => rows.push(FactRow::new(org, group, product, value)),
                None => warn!(
                    "Skipping value {} for unknown organization '{}' (product '{}')",
                    value, org, product
                ),
            }
        }
        rows
    }

    pub fn len(&self) -> usize {
        self.organizations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty()
    }
}
