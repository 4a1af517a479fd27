//! Translation of the input layer's requests into mutations.
//!
//! The drag-and-drop layer speaks in placement payloads: a type string
//! (either a field kind like `email` or a row layout like `row-3col`) plus
//! an optional column target. The property panel speaks in patches. Both
//! are translated here; everything structural happens in [`Mutation`].

use crate::{ColumnCount, ElementPatch, Mutation, MutationError, SlotRef};
use formstudio_model::FieldKind;
use serde::{Deserialize, Serialize};

/// A drop on the canvas or on a row's column slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRequest {
    pub element_type: String,
    pub target: Option<SlotRef>,
}

impl PlacementRequest {
    pub fn new(element_type: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            target: None,
        }
    }

    pub fn into_column(element_type: impl Into<String>, target: SlotRef) -> Self {
        Self {
            element_type: element_type.into(),
            target: Some(target),
        }
    }

    /// Resolve the payload into a mutation.
    ///
    /// Row layouts targeting a column slot are rejected before any state
    /// changes; rows never nest.
    pub fn into_mutation(self) -> Result<Mutation, MutationError> {
        if let Some(columns) = parse_row_layout(&self.element_type) {
            if self.target.is_some() {
                return Err(MutationError::NestedRowLayout);
            }
            return Ok(Mutation::InsertRow { columns });
        }

        let kind: FieldKind = self
            .element_type
            .parse()
            .map_err(|_| MutationError::UnknownElementType(self.element_type.clone()))?;
        Ok(Mutation::InsertElement {
            kind,
            target: self.target,
        })
    }
}

/// Parse a `row-<n>col` layout payload. Returns `None` for anything else,
/// including unsupported column counts.
pub fn parse_row_layout(payload: &str) -> Option<ColumnCount> {
    let n: u8 = payload.strip_prefix("row-")?.strip_suffix("col")?.parse().ok()?;
    ColumnCount::try_from(n).ok()
}

/// A property-panel edit: field properties for an element, a column count
/// for a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyPatch {
    Element(ElementPatch),
    Row { columns: ColumnCount },
}

impl PropertyPatch {
    pub fn into_mutation(self, id: impl Into<String>) -> Mutation {
        match self {
            PropertyPatch::Element(patch) => Mutation::UpdateElement {
                id: id.into(),
                patch,
            },
            PropertyPatch::Row { columns } => Mutation::SetRowColumns {
                id: id.into(),
                columns,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row_layout() {
        assert_eq!(parse_row_layout("row-2col"), Some(ColumnCount::Two));
        assert_eq!(parse_row_layout("row-3col"), Some(ColumnCount::Three));
        assert_eq!(parse_row_layout("row-4col"), Some(ColumnCount::Four));
        assert_eq!(parse_row_layout("row-5col"), None);
        assert_eq!(parse_row_layout("textarea"), None);
    }

    #[test]
    fn test_field_placement_resolves_to_insert() {
        let mutation = PlacementRequest::new("email").into_mutation().unwrap();
        assert_eq!(
            mutation,
            Mutation::InsertElement {
                kind: FieldKind::Email,
                target: None,
            }
        );
    }

    #[test]
    fn test_row_into_column_is_rejected() {
        let request = PlacementRequest::into_column(
            "row-2col",
            SlotRef {
                row_id: "row_1".to_string(),
                column_index: 0,
            },
        );
        assert_eq!(
            request.into_mutation(),
            Err(MutationError::NestedRowLayout)
        );
    }

    #[test]
    fn test_property_patch_targets_by_kind() {
        let patch = PropertyPatch::Element(ElementPatch {
            label: Some("Phone".to_string()),
            ..Default::default()
        });
        assert!(matches!(
            patch.into_mutation("element_1"),
            Mutation::UpdateElement { id, .. } if id == "element_1"
        ));

        let patch = PropertyPatch::Row {
            columns: ColumnCount::Four,
        };
        assert_eq!(
            patch.into_mutation("row_1"),
            Mutation::SetRowColumns {
                id: "row_1".to_string(),
                columns: ColumnCount::Four,
            }
        );
    }

    #[test]
    fn test_unknown_payload_is_rejected() {
        assert_eq!(
            PlacementRequest::new("rating").into_mutation(),
            Err(MutationError::UnknownElementType("rating".to_string()))
        );
    }
}
