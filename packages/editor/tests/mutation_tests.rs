//! Mutation sequences exercised end to end against the document invariants.

use formstudio_editor::{
    ColumnCount, Editor, ElementPatch, FieldKind, Mutation, PlacementRequest, Selection, SlotRef,
};

fn insert(editor: &mut Editor, kind: FieldKind, target: Option<SlotRef>) {
    editor
        .apply(Mutation::InsertElement { kind, target })
        .expect("insert should succeed");
}

fn slot(row_id: &str, column_index: usize) -> SlotRef {
    SlotRef {
        row_id: row_id.to_string(),
        column_index,
    }
}

#[test]
fn test_containment_holds_across_create_and_delete_sequences() {
    let mut editor = Editor::new();

    insert(&mut editor, FieldKind::Text, None);
    editor
        .apply(Mutation::InsertRow {
            columns: ColumnCount::Three,
        })
        .unwrap();
    insert(&mut editor, FieldKind::Email, Some(slot("row_1", 0)));
    insert(&mut editor, FieldKind::Select, Some(slot("row_1", 2)));
    insert(&mut editor, FieldKind::Checkbox, None);

    editor.document().verify_containment().unwrap();

    editor
        .apply(Mutation::RemoveElement {
            id: "element_2".to_string(),
        })
        .unwrap();
    editor.document().verify_containment().unwrap();

    editor
        .apply(Mutation::SetRowColumns {
            id: "row_1".to_string(),
            columns: ColumnCount::Two,
        })
        .unwrap();
    editor.document().verify_containment().unwrap();

    editor
        .apply(Mutation::RemoveRow {
            id: "row_1".to_string(),
        })
        .unwrap();
    editor.document().verify_containment().unwrap();
}

#[test]
fn test_shrink_merges_removed_columns_in_order() {
    let mut editor = Editor::new();
    editor
        .apply(Mutation::InsertRow {
            columns: ColumnCount::Three,
        })
        .unwrap();

    // Column 1 gets element_1, column 2 gets element_2 and element_3.
    insert(&mut editor, FieldKind::Text, Some(slot("row_1", 1)));
    insert(&mut editor, FieldKind::Email, Some(slot("row_1", 2)));
    insert(&mut editor, FieldKind::Tel, Some(slot("row_1", 2)));

    editor
        .apply(Mutation::SetRowColumns {
            id: "row_1".to_string(),
            columns: ColumnCount::Two,
        })
        .unwrap();

    let row = editor.document().find_row("row_1").unwrap();
    assert_eq!(row.columns, ColumnCount::Two);
    assert_eq!(row.slots.len(), 2);
    assert!(row.slots[0].is_empty());

    // Column 1 keeps its own element first, then the moved ones in their
    // original order.
    let ids: Vec<&str> = row.slots[1].iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["element_1", "element_2", "element_3"]);
    for element in &row.slots[1] {
        assert_eq!(element.column_index, Some(1));
    }
    editor.document().verify_containment().unwrap();
}

#[test]
fn test_grow_adds_empty_columns_and_preserves_count() {
    let mut editor = Editor::new();
    editor
        .apply(Mutation::InsertRow {
            columns: ColumnCount::Two,
        })
        .unwrap();
    insert(&mut editor, FieldKind::Text, Some(slot("row_1", 0)));
    insert(&mut editor, FieldKind::Email, Some(slot("row_1", 1)));

    editor
        .apply(Mutation::SetRowColumns {
            id: "row_1".to_string(),
            columns: ColumnCount::Four,
        })
        .unwrap();

    let row = editor.document().find_row("row_1").unwrap();
    assert_eq!(row.slots.len(), 4);
    assert_eq!(row.slots[0][0].id, "element_1");
    assert_eq!(row.slots[1][0].id, "element_2");
    assert!(row.slots[2].is_empty());
    assert!(row.slots[3].is_empty());
    assert_eq!(row.element_count(), 2);
}

#[test]
fn test_delete_row_keeps_standalone_elements() {
    let mut editor = Editor::new();
    insert(&mut editor, FieldKind::Text, None);
    editor
        .apply(Mutation::InsertRow {
            columns: ColumnCount::Two,
        })
        .unwrap();
    insert(&mut editor, FieldKind::Email, Some(slot("row_1", 0)));
    insert(&mut editor, FieldKind::Tel, Some(slot("row_1", 1)));

    editor
        .apply(Mutation::RemoveRow {
            id: "row_1".to_string(),
        })
        .unwrap();

    let doc = editor.document();
    assert_eq!(doc.elements.len(), 1);
    assert!(doc.rows.is_empty());
    // The owned elements went with the row.
    assert!(doc.find_element("element_2").is_none());
    assert!(doc.find_element("element_3").is_none());
}

#[test]
fn test_email_element_defaults_scenario() {
    let mut editor = Editor::new();
    editor.place(PlacementRequest::new("email")).unwrap();

    let element = editor.document().find_element("element_1").unwrap();
    assert_eq!(element.id, "element_1");
    assert_eq!(element.kind, FieldKind::Email);
    assert_eq!(element.label, "Email Address");
    assert_eq!(element.placeholder, "your@email.com");
    assert!(!element.required);
}

#[test]
fn test_targeted_insert_lands_in_one_column() {
    let mut editor = Editor::new();
    editor.place(PlacementRequest::new("row-3col")).unwrap();
    insert(&mut editor, FieldKind::Text, Some(slot("row_1", 1)));

    let row = editor.document().find_row("row_1").unwrap();
    assert!(row.slots[0].is_empty());
    assert_eq!(row.slots[1].len(), 1);
    assert!(row.slots[2].is_empty());

    let element = &row.slots[1][0];
    assert_eq!(element.parent_row.as_deref(), Some("row_1"));
    assert_eq!(element.column_index, Some(1));
}

#[test]
fn test_selection_survives_mutations_when_entity_does() {
    let mut editor = Editor::new();
    insert(&mut editor, FieldKind::Text, None);
    insert(&mut editor, FieldKind::Email, None);

    assert!(editor.select(Selection::Element("element_1".to_string())));
    editor
        .apply(Mutation::RemoveElement {
            id: "element_2".to_string(),
        })
        .unwrap();
    // element_1 still exists and stays selected.
    assert!(editor.document().is_element_selected("element_1"));

    editor
        .apply(Mutation::RemoveElement {
            id: "element_1".to_string(),
        })
        .unwrap();
    assert!(editor.document().selection().is_none());

    // Re-selecting the stale id is a soft failure.
    assert!(!editor.select(Selection::Element("element_1".to_string())));
    assert!(editor.document().selection().is_none());
}

#[test]
fn test_update_element_patch_leaves_unset_fields() {
    let mut editor = Editor::new();
    insert(&mut editor, FieldKind::Text, None);

    editor
        .apply(Mutation::UpdateElement {
            id: "element_1".to_string(),
            patch: ElementPatch {
                label: Some("Full Name".to_string()),
                required: Some(true),
                ..Default::default()
            },
        })
        .unwrap();

    let element = editor.document().find_element("element_1").unwrap();
    assert_eq!(element.label, "Full Name");
    assert!(element.required);
    // Placeholder untouched by the patch.
    assert_eq!(element.placeholder, "Enter text here...");
}

#[test]
fn test_snapshot_round_trip_for_standalone_elements() {
    let mut editor = Editor::new();
    insert(&mut editor, FieldKind::Email, None);
    insert(&mut editor, FieldKind::Select, None);
    editor
        .apply(Mutation::InsertRow {
            columns: ColumnCount::Two,
        })
        .unwrap();
    insert(&mut editor, FieldKind::Text, Some(slot("row_1", 0)));

    let snapshot = editor.export_snapshot("Contact", chrono::Utc::now());
    let restored = Editor::from_snapshot(&snapshot).unwrap();

    // Standalone elements round-trip exactly; the row layout is not part
    // of the format.
    assert_eq!(restored.document().elements, editor.document().elements);
    assert!(restored.document().rows.is_empty());
}
