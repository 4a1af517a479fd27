use crate::Element;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of column slots a row divides its space into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ColumnCount {
    Two,
    Three,
    Four,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid column count: {0} (expected 2, 3 or 4)")]
pub struct InvalidColumnCount(pub u8);

impl ColumnCount {
    pub fn as_usize(&self) -> usize {
        match self {
            ColumnCount::Two => 2,
            ColumnCount::Three => 3,
            ColumnCount::Four => 4,
        }
    }
}

impl TryFrom<u8> for ColumnCount {
    type Error = InvalidColumnCount;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ColumnCount::Two),
            3 => Ok(ColumnCount::Three),
            4 => Ok(ColumnCount::Four),
            other => Err(InvalidColumnCount(other)),
        }
    }
}

impl From<ColumnCount> for u8 {
    fn from(value: ColumnCount) -> Self {
        value.as_usize() as u8
    }
}

/// A layout container splitting the form into ordered column slots.
///
/// The row exclusively owns every element placed into its slots; deleting
/// the row deletes them too. `slots.len()` always equals
/// `columns.as_usize()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,
    pub columns: ColumnCount,
    pub slots: Vec<Vec<Element>>,
}

impl Row {
    /// Build an empty row with `columns` empty slots.
    pub fn new(id: impl Into<String>, columns: ColumnCount) -> Self {
        Self {
            id: id.into(),
            columns,
            slots: (0..columns.as_usize()).map(|_| Vec::new()).collect(),
        }
    }

    /// Layout tag derived from the column count: `row-2col`, `row-3col`,
    /// `row-4col`. Derived rather than stored so it cannot drift.
    pub fn layout_class(&self) -> String {
        format!("row-{}col", self.columns.as_usize())
    }

    /// Total element count across all slots.
    pub fn element_count(&self) -> usize {
        self.slots.iter().map(|slot| slot.len()).sum()
    }

    /// Iterate elements in slot order.
    pub fn iter_elements(&self) -> impl Iterator<Item = &Element> {
        self.slots.iter().flatten()
    }

    pub fn find_element(&self, id: &str) -> Option<&Element> {
        self.iter_elements().find(|e| e.id == id)
    }

    pub fn find_element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.slots.iter_mut().flatten().find(|e| e.id == id)
    }

    /// Remove the first element with `id`, scanning slots in order.
    pub fn remove_element(&mut self, id: &str) -> Option<Element> {
        for slot in &mut self.slots {
            if let Some(pos) = slot.iter().position(|e| e.id == id) {
                return Some(slot.remove(pos));
            }
        }
        None
    }
}
