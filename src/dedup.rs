use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::{Result, ToolError};
use crate::model::{Part, PartKey};

/// Parts keyed by identity, at most one entry per [`PartKey`].
///
/// Iteration follows the order in which each identity was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartCollection<'c> {
    parts: Vec<Part<'c>>,
    index: HashMap<PartKey, usize>,
}

impl<'c> PartCollection<'c> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `part`, or folds its quantity into the entry already holding
    /// its identity. A merged quantity that does not fit in a `u64` is
    /// rejected and leaves the entry unchanged.
    pub fn insert(&mut self, part: Part<'c>) -> Result<()> {
        match self.index.entry(part.key()) {
            Entry::Occupied(slot) => {
                let existing = &mut self.parts[*slot.get()];
                existing.quantity = existing.quantity.checked_add(part.quantity).ok_or_else(|| {
                    ToolError::MalformedInput(format!(
                        "quantity of part '{}' in color {} overflows",
                        part.part_number, part.color.target_id
                    ))
                })?;
            }
            Entry::Vacant(slot) => {
                slot.insert(self.parts.len());
                self.parts.push(part);
            }
        }
        Ok(())
    }

    pub fn get(&self, key: &PartKey) -> Option<&Part<'c>> {
        self.index.get(key).map(|&position| &self.parts[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Part<'c>> {
        self.parts.iter()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Sum of all quantities in the collection.
    pub fn total_quantity(&self) -> u128 {
        self.parts.iter().map(|part| u128::from(part.quantity)).sum()
    }

    pub fn into_parts(self) -> Vec<Part<'c>> {
        self.parts
    }
}

/// Merges parts sharing an identity by summing their quantities.
pub fn reduce<'c, I>(parts: I) -> Result<PartCollection<'c>>
where
    I: IntoIterator<Item = Part<'c>>,
{
    let mut collection = PartCollection::new();
    for part in parts {
        collection.insert(part)?;
    }
    Ok(collection)
}
