use crate::{Element, Row};
use serde::{Deserialize, Serialize};

/// The current selection: at most one element or one row, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    Element(String),
    Row(String),
}

/// Aggregate root for a form under construction.
///
/// Owns the standalone elements (insertion order = display order), the
/// layout rows, the counters that mint `element_<n>` / `row_<n>` ids, and
/// the selection. Identifiers are never reused within a session; the
/// counters only reset together in [`Document::clear`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub elements: Vec<Element>,
    pub rows: Vec<Row>,
    element_counter: u64,
    row_counter: u64,
    selection: Option<Selection>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the document holds neither standalone elements nor rows.
    /// Empty rows still count as content (the canvas shows their drop
    /// zones, not the placeholder).
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.rows.is_empty()
    }

    /// Mint the next `element_<n>` id.
    pub fn mint_element_id(&mut self) -> String {
        self.element_counter += 1;
        format!("element_{}", self.element_counter)
    }

    /// Mint the next `row_<n>` id.
    pub fn mint_row_id(&mut self) -> String {
        self.row_counter += 1;
        format!("row_{}", self.row_counter)
    }

    pub fn element_counter(&self) -> u64 {
        self.element_counter
    }

    /// Raise the element counter so future ids cannot collide with `n`.
    /// Used when importing a snapshot that carries minted ids.
    pub fn bump_element_counter(&mut self, n: u64) {
        self.element_counter = self.element_counter.max(n);
    }

    /// Find an element by id. Standalone elements are scanned first, then
    /// each row's slots in order; callers may rely on this traversal order.
    pub fn find_element(&self, id: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|e| e.id == id)
            .or_else(|| self.rows.iter().find_map(|row| row.find_element(id)))
    }

    pub fn find_element_mut(&mut self, id: &str) -> Option<&mut Element> {
        if let Some(pos) = self.elements.iter().position(|e| e.id == id) {
            return self.elements.get_mut(pos);
        }
        self.rows
            .iter_mut()
            .find_map(|row| row.find_element_mut(id))
    }

    pub fn find_row(&self, id: &str) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn find_row_mut(&mut self, id: &str) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    /// Iterate every element in display order: standalone first, then each
    /// row's slots.
    pub fn iter_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements
            .iter()
            .chain(self.rows.iter().flat_map(|row| row.iter_elements()))
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Select an element or row by id, replacing any previous selection.
    ///
    /// Fail-soft: selecting an id that no longer exists clears the
    /// selection and returns `false` instead of erroring. This covers the
    /// stale-reference case where a deferred re-selection races a deletion.
    pub fn select(&mut self, target: Selection) -> bool {
        let exists = match &target {
            Selection::Element(id) => self.find_element(id).is_some(),
            Selection::Row(id) => self.find_row(id).is_some(),
        };
        self.selection = exists.then_some(target);
        exists
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// True when `id` names the selected element.
    pub fn is_element_selected(&self, id: &str) -> bool {
        matches!(&self.selection, Some(Selection::Element(s)) if s == id)
    }

    /// True when `id` names the selected row.
    pub fn is_row_selected(&self, id: &str) -> bool {
        matches!(&self.selection, Some(Selection::Row(s)) if s == id)
    }

    /// Reset collections, counters and selection in one step.
    pub fn clear(&mut self) {
        *self = Document::new();
    }

    /// Check the structural invariants the mutation engine maintains:
    /// back-references agree with containment, slot counts match column
    /// counts, option lists are non-empty where present, and ids are
    /// unique. Intended for tests and snapshot import.
    pub fn verify_containment(&self) -> Result<(), String> {
        let mut seen = std::collections::HashSet::new();
        for element in self.iter_elements() {
            if !seen.insert(element.id.as_str()) {
                return Err(format!("duplicate id {}", element.id));
            }
            verify_options(element)?;
        }

        for element in &self.elements {
            if element.parent_row.is_some() || element.column_index.is_some() {
                return Err(format!(
                    "standalone element {} carries a row back-reference",
                    element.id
                ));
            }
        }

        for row in &self.rows {
            if row.slots.len() != row.columns.as_usize() {
                return Err(format!(
                    "row {} has {} slots for {} columns",
                    row.id,
                    row.slots.len(),
                    row.columns.as_usize()
                ));
            }
            for (column_index, slot) in row.slots.iter().enumerate() {
                for element in slot {
                    if element.parent_row.as_deref() != Some(row.id.as_str())
                        || element.column_index != Some(column_index)
                    {
                        return Err(format!(
                            "element {} is stored in {}[{}] but points at {:?}[{:?}]",
                            element.id,
                            row.id,
                            column_index,
                            element.parent_row,
                            element.column_index
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}

fn verify_options(element: &Element) -> Result<(), String> {
    match (&element.options, element.kind.has_options()) {
        (Some(options), true) if options.is_empty() => {
            Err(format!("element {} has an empty option list", element.id))
        }
        (None, true) => Err(format!(
            "element {} ({}) is missing its option list",
            element.id, element.kind
        )),
        (Some(_), false) => Err(format!(
            "element {} ({}) carries options it cannot render",
            element.id, element.kind
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ColumnCount, FieldKind};

    fn doc_with_row() -> Document {
        let mut doc = Document::new();
        let row_id = doc.mint_row_id();
        doc.rows.push(Row::new(&row_id, ColumnCount::Two));

        let id = doc.mint_element_id();
        let mut element = Element::new(&id, FieldKind::Text);
        element.parent_row = Some(row_id.clone());
        element.column_index = Some(1);
        doc.rows[0].slots[1].push(element);

        let id = doc.mint_element_id();
        doc.elements.push(Element::new(&id, FieldKind::Email));
        doc
    }

    #[test]
    fn test_minted_ids_are_sequential() {
        let mut doc = Document::new();
        assert_eq!(doc.mint_element_id(), "element_1");
        assert_eq!(doc.mint_element_id(), "element_2");
        assert_eq!(doc.mint_row_id(), "row_1");
    }

    #[test]
    fn test_find_scans_standalone_before_rows() {
        let doc = doc_with_row();
        // element_1 lives in the row, element_2 is standalone.
        assert!(doc.find_element("element_1").unwrap().is_in_row());
        assert!(!doc.find_element("element_2").unwrap().is_in_row());
        assert!(doc.find_element("element_9").is_none());
    }

    #[test]
    fn test_select_is_fail_soft() {
        let mut doc = doc_with_row();
        assert!(doc.select(Selection::Element("element_2".into())));
        assert!(doc.is_element_selected("element_2"));

        // Selecting a row replaces the element selection.
        assert!(doc.select(Selection::Row("row_1".into())));
        assert!(doc.is_row_selected("row_1"));
        assert!(!doc.is_element_selected("element_2"));

        // A stale id clears the selection without erroring.
        assert!(!doc.select(Selection::Element("element_404".into())));
        assert!(doc.selection().is_none());
    }

    #[test]
    fn test_clear_resets_counters_and_selection() {
        let mut doc = doc_with_row();
        doc.select(Selection::Row("row_1".into()));
        doc.clear();

        assert!(doc.is_empty());
        assert!(doc.selection().is_none());
        assert_eq!(doc.mint_element_id(), "element_1");
        assert_eq!(doc.mint_row_id(), "row_1");
    }

    #[test]
    fn test_verify_containment_catches_drift() {
        let mut doc = doc_with_row();
        assert!(doc.verify_containment().is_ok());

        doc.rows[0].slots[1][0].column_index = Some(0);
        assert!(doc.verify_containment().is_err());
    }
}
