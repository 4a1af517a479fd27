//! # Document Mutations
//!
//! High-level semantic operations on form documents.
//!
//! ## Design principles
//!
//! 1. **Intent-preserving**: each mutation represents one semantic edit
//! 2. **Validated**: every mutation checks structural constraints before
//!    touching the document — a failure is a strict no-op
//! 3. **Minimal**: no generic tree splicing, only the operations the
//!    designer needs
//!
//! ## Mutation semantics
//!
//! ### InsertElement
//! - Ids are minted only after validation passes, so a rejected insert
//!   burns no identifier
//! - Targeted inserts append to the named column slot and set the
//!   element's back-reference to match
//!
//! ### RemoveElement / RemoveRow
//! - Removal scans row slots first, then the standalone list, and stops
//!   at the first match
//! - Removing a row removes every element it owns; nothing migrates to
//!   the standalone list
//!
//! ### SetRowColumns
//! - Shrinking merges the elements of removed slots, in order, onto the
//!   end of the last surviving slot; no element is ever dropped
//! - Growing appends empty slots and leaves existing slots untouched
//!
//! ### Option edits
//! - An option list never drops below one entry; removals and bulk
//!   replacements that would empty it are rejected

use formstudio_model::{ColumnCount, Document, Element, FieldKind, Selection};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reference to one column slot of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRef {
    pub row_id: String,
    pub column_index: usize,
}

/// Partial update for an element's editable properties. Unset fields are
/// left untouched. `options` is a bulk replacement: blank entries are
/// dropped and the result must stay non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementPatch {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub required: Option<bool>,
    pub options: Option<Vec<String>>,
}

/// Semantic mutations (intent-preserving operations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    /// Create an element of `kind`, appended to a column slot when
    /// `target` is given, to the standalone list otherwise.
    InsertElement {
        kind: FieldKind,
        target: Option<SlotRef>,
    },

    /// Append a new row with the given number of empty column slots.
    InsertRow { columns: ColumnCount },

    /// Remove an element from wherever it resides.
    RemoveElement { id: String },

    /// Remove a row and every element it owns.
    RemoveRow { id: String },

    /// Reconfigure a row's column count (2 ↔ 3 ↔ 4).
    SetRowColumns { id: String, columns: ColumnCount },

    /// Apply a property patch to an element.
    UpdateElement { id: String, patch: ElementPatch },

    /// Append a placeholder entry to an element's option list.
    AddOption { id: String },

    /// Remove one option; refused when it would empty the list.
    RemoveOption { id: String, index: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("element not found: {0}")]
    ElementNotFound(String),

    #[error("row not found: {0}")]
    RowNotFound(String),

    #[error("column {column_index} is out of range for row {row_id} ({columns} columns)")]
    ColumnOutOfRange {
        row_id: String,
        column_index: usize,
        columns: usize,
    },

    #[error("row layouts cannot be placed inside columns")]
    NestedRowLayout,

    #[error("element {0} does not carry options")]
    OptionsNotSupported(String),

    #[error("option {index} is out of range for element {id}")]
    OptionIndexOutOfRange { id: String, index: usize },

    #[error("element {0} must keep at least one option")]
    LastOption(String),

    #[error("replacement option list has no non-blank entries")]
    EmptyOptionList,

    #[error("unknown element type: {0}")]
    UnknownElementType(String),
}

impl Mutation {
    /// Check this mutation against the document without applying it.
    pub fn validate(&self, doc: &Document) -> Result<(), MutationError> {
        match self {
            Mutation::InsertElement { target, .. } => match target {
                Some(slot) => validate_slot(doc, slot),
                None => Ok(()),
            },

            Mutation::InsertRow { .. } => Ok(()),

            Mutation::RemoveElement { id } => {
                doc.find_element(id)
                    .ok_or_else(|| MutationError::ElementNotFound(id.clone()))?;
                Ok(())
            }

            Mutation::RemoveRow { id } => {
                doc.find_row(id)
                    .ok_or_else(|| MutationError::RowNotFound(id.clone()))?;
                Ok(())
            }

            Mutation::SetRowColumns { id, .. } => {
                doc.find_row(id)
                    .ok_or_else(|| MutationError::RowNotFound(id.clone()))?;
                Ok(())
            }

            Mutation::UpdateElement { id, patch } => {
                let element = doc
                    .find_element(id)
                    .ok_or_else(|| MutationError::ElementNotFound(id.clone()))?;
                if let Some(options) = &patch.options {
                    require_options(element)?;
                    if sanitize_options(options).is_empty() {
                        return Err(MutationError::EmptyOptionList);
                    }
                }
                Ok(())
            }

            Mutation::AddOption { id } => {
                let element = doc
                    .find_element(id)
                    .ok_or_else(|| MutationError::ElementNotFound(id.clone()))?;
                require_options(element)?;
                Ok(())
            }

            Mutation::RemoveOption { id, index } => {
                let element = doc
                    .find_element(id)
                    .ok_or_else(|| MutationError::ElementNotFound(id.clone()))?;
                let options = require_options(element)?;
                if *index >= options.len() {
                    return Err(MutationError::OptionIndexOutOfRange {
                        id: id.clone(),
                        index: *index,
                    });
                }
                if options.len() <= 1 {
                    return Err(MutationError::LastOption(id.clone()));
                }
                Ok(())
            }
        }
    }

    /// Validate and apply. On error the document is untouched.
    pub fn apply(&self, doc: &mut Document) -> Result<(), MutationError> {
        self.validate(doc)?;

        match self {
            Mutation::InsertElement { kind, target } => {
                Self::apply_insert_element(doc, *kind, target.as_ref())
            }
            Mutation::InsertRow { columns } => Self::apply_insert_row(doc, *columns),
            Mutation::RemoveElement { id } => Self::apply_remove_element(doc, id),
            Mutation::RemoveRow { id } => Self::apply_remove_row(doc, id),
            Mutation::SetRowColumns { id, columns } => {
                Self::apply_set_row_columns(doc, id, *columns)
            }
            Mutation::UpdateElement { id, patch } => Self::apply_update_element(doc, id, patch),
            Mutation::AddOption { id } => Self::apply_add_option(doc, id),
            Mutation::RemoveOption { id, index } => Self::apply_remove_option(doc, id, *index),
        }
    }

    fn apply_insert_element(
        doc: &mut Document,
        kind: FieldKind,
        target: Option<&SlotRef>,
    ) -> Result<(), MutationError> {
        let id = doc.mint_element_id();
        let mut element = Element::new(&id, kind);

        match target {
            Some(slot) => {
                element.parent_row = Some(slot.row_id.clone());
                element.column_index = Some(slot.column_index);
                // Validated above, so the row and slot are present.
                let row = doc
                    .find_row_mut(&slot.row_id)
                    .ok_or_else(|| MutationError::RowNotFound(slot.row_id.clone()))?;
                row.slots[slot.column_index].push(element);
                tracing::debug!(id = %id, row = %slot.row_id, column = slot.column_index, "inserted element");
            }
            None => {
                doc.elements.push(element);
                tracing::debug!(id = %id, "inserted standalone element");
            }
        }
        Ok(())
    }

    fn apply_insert_row(doc: &mut Document, columns: ColumnCount) -> Result<(), MutationError> {
        let id = doc.mint_row_id();
        doc.rows.push(formstudio_model::Row::new(&id, columns));
        tracing::debug!(id = %id, columns = columns.as_usize(), "inserted row");
        Ok(())
    }

    fn apply_remove_element(doc: &mut Document, id: &str) -> Result<(), MutationError> {
        // Rows are scanned before the standalone list, stopping at the
        // first match.
        let mut removed = false;
        for row in &mut doc.rows {
            if row.remove_element(id).is_some() {
                removed = true;
                break;
            }
        }
        if !removed {
            let pos = doc
                .elements
                .iter()
                .position(|e| e.id == id)
                .ok_or_else(|| MutationError::ElementNotFound(id.to_string()))?;
            doc.elements.remove(pos);
        }

        if doc.is_element_selected(id) {
            doc.clear_selection();
        }
        tracing::debug!(id = %id, "removed element");
        Ok(())
    }

    fn apply_remove_row(doc: &mut Document, id: &str) -> Result<(), MutationError> {
        let pos = doc
            .rows
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| MutationError::RowNotFound(id.to_string()))?;
        let row = doc.rows.remove(pos);

        // Drop the selection if it pointed at the row or anything it owned.
        let stale = match doc.selection() {
            Some(Selection::Row(selected)) => selected == id,
            Some(Selection::Element(selected)) => row.find_element(selected).is_some(),
            None => false,
        };
        if stale {
            doc.clear_selection();
        }
        tracing::debug!(id = %id, elements = row.element_count(), "removed row");
        Ok(())
    }

    fn apply_set_row_columns(
        doc: &mut Document,
        id: &str,
        columns: ColumnCount,
    ) -> Result<(), MutationError> {
        let row = doc
            .find_row_mut(id)
            .ok_or_else(|| MutationError::RowNotFound(id.to_string()))?;

        let old = row.columns.as_usize();
        let new = columns.as_usize();

        if new > old {
            for _ in old..new {
                row.slots.push(Vec::new());
            }
        } else if new < old {
            // Merge the removed slots' elements, in original order, onto
            // the end of the last surviving slot.
            let moved: Vec<Element> = row.slots.drain(new..).flatten().collect();
            let last = new - 1;
            for mut element in moved {
                element.column_index = Some(last);
                row.slots[last].push(element);
            }
        }

        row.columns = columns;
        tracing::debug!(id = %id, from = old, to = new, "reconfigured row columns");
        Ok(())
    }

    fn apply_update_element(
        doc: &mut Document,
        id: &str,
        patch: &ElementPatch,
    ) -> Result<(), MutationError> {
        let element = doc
            .find_element_mut(id)
            .ok_or_else(|| MutationError::ElementNotFound(id.to_string()))?;

        if let Some(label) = &patch.label {
            element.label = label.clone();
        }
        if let Some(placeholder) = &patch.placeholder {
            element.placeholder = placeholder.clone();
        }
        if let Some(required) = patch.required {
            element.required = required;
        }
        if let Some(options) = &patch.options {
            // Validated non-empty after sanitizing.
            element.options = Some(sanitize_options(options));
        }
        Ok(())
    }

    fn apply_add_option(doc: &mut Document, id: &str) -> Result<(), MutationError> {
        let element = doc
            .find_element_mut(id)
            .ok_or_else(|| MutationError::ElementNotFound(id.to_string()))?;
        element
            .options
            .as_mut()
            .ok_or_else(|| MutationError::OptionsNotSupported(id.to_string()))?
            .push("New Option".to_string());
        Ok(())
    }

    fn apply_remove_option(doc: &mut Document, id: &str, index: usize) -> Result<(), MutationError> {
        let element = doc
            .find_element_mut(id)
            .ok_or_else(|| MutationError::ElementNotFound(id.to_string()))?;
        element
            .options
            .as_mut()
            .ok_or_else(|| MutationError::OptionsNotSupported(id.to_string()))?
            .remove(index);
        Ok(())
    }
}

fn validate_slot(doc: &Document, slot: &SlotRef) -> Result<(), MutationError> {
    let row = doc
        .find_row(&slot.row_id)
        .ok_or_else(|| MutationError::RowNotFound(slot.row_id.clone()))?;
    if slot.column_index >= row.columns.as_usize() {
        return Err(MutationError::ColumnOutOfRange {
            row_id: slot.row_id.clone(),
            column_index: slot.column_index,
            columns: row.columns.as_usize(),
        });
    }
    Ok(())
}

fn require_options(element: &Element) -> Result<&Vec<String>, MutationError> {
    element
        .options
        .as_ref()
        .ok_or_else(|| MutationError::OptionsNotSupported(element.id.clone()))
}

/// Trim entries and drop the blank ones.
fn sanitize_options(options: &[String]) -> Vec<String> {
    options
        .iter()
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .map(|o| o.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::InsertElement {
            kind: FieldKind::Email,
            target: Some(SlotRef {
                row_id: "row_1".to_string(),
                column_index: 2,
            }),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_failed_insert_burns_no_id() {
        let mut doc = Document::new();
        let mutation = Mutation::InsertElement {
            kind: FieldKind::Text,
            target: Some(SlotRef {
                row_id: "row_9".to_string(),
                column_index: 0,
            }),
        };

        assert_eq!(
            mutation.apply(&mut doc),
            Err(MutationError::RowNotFound("row_9".to_string()))
        );

        // The next successful insert still mints element_1.
        Mutation::InsertElement {
            kind: FieldKind::Text,
            target: None,
        }
        .apply(&mut doc)
        .unwrap();
        assert_eq!(doc.elements[0].id, "element_1");
    }

    #[test]
    fn test_column_out_of_range_is_rejected() {
        let mut doc = Document::new();
        Mutation::InsertRow {
            columns: ColumnCount::Two,
        }
        .apply(&mut doc)
        .unwrap();

        let result = Mutation::InsertElement {
            kind: FieldKind::Text,
            target: Some(SlotRef {
                row_id: "row_1".to_string(),
                column_index: 2,
            }),
        }
        .apply(&mut doc);

        assert!(matches!(
            result,
            Err(MutationError::ColumnOutOfRange { .. })
        ));
        assert_eq!(doc.rows[0].element_count(), 0);
    }

    #[test]
    fn test_option_floor_is_enforced() {
        let mut doc = Document::new();
        Mutation::InsertElement {
            kind: FieldKind::Select,
            target: None,
        }
        .apply(&mut doc)
        .unwrap();

        // Shrink to a single option, then try to remove it.
        let patch = ElementPatch {
            options: Some(vec!["A".to_string()]),
            ..Default::default()
        };
        Mutation::UpdateElement {
            id: "element_1".to_string(),
            patch,
        }
        .apply(&mut doc)
        .unwrap();

        let result = Mutation::RemoveOption {
            id: "element_1".to_string(),
            index: 0,
        }
        .apply(&mut doc);

        assert_eq!(result, Err(MutationError::LastOption("element_1".into())));
        assert_eq!(
            doc.find_element("element_1").unwrap().options,
            Some(vec!["A".to_string()])
        );
    }

    #[test]
    fn test_bulk_replace_drops_blanks_and_keeps_prior_on_empty() {
        let mut doc = Document::new();
        Mutation::InsertElement {
            kind: FieldKind::Radio,
            target: None,
        }
        .apply(&mut doc)
        .unwrap();

        let patch = ElementPatch {
            options: Some(vec!["  A  ".to_string(), "".to_string(), "B".to_string()]),
            ..Default::default()
        };
        Mutation::UpdateElement {
            id: "element_1".to_string(),
            patch,
        }
        .apply(&mut doc)
        .unwrap();
        assert_eq!(
            doc.find_element("element_1").unwrap().options,
            Some(vec!["A".to_string(), "B".to_string()])
        );

        let patch = ElementPatch {
            options: Some(vec!["   ".to_string(), "".to_string()]),
            ..Default::default()
        };
        let result = Mutation::UpdateElement {
            id: "element_1".to_string(),
            patch,
        }
        .apply(&mut doc);

        assert_eq!(result, Err(MutationError::EmptyOptionList));
        assert_eq!(
            doc.find_element("element_1").unwrap().options,
            Some(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn test_add_option_rejected_for_plain_inputs() {
        let mut doc = Document::new();
        Mutation::InsertElement {
            kind: FieldKind::Text,
            target: None,
        }
        .apply(&mut doc)
        .unwrap();

        let result = Mutation::AddOption {
            id: "element_1".to_string(),
        }
        .apply(&mut doc);

        assert_eq!(
            result,
            Err(MutationError::OptionsNotSupported("element_1".into()))
        );
    }
}
