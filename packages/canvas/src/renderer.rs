//! Canvas rendering - Document to editable virtual tree

use crate::vdom::VNode;
use formstudio_model::{Document, Element, FieldKind, Row};

/// Presentation inputs that live outside the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    /// Optional form title rendered as an `h2` ahead of the fields.
    pub title: Option<String>,
}

/// Result of projecting a document onto the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasTree {
    /// The document is empty: a single drop-target placeholder.
    Placeholder(VNode),
    /// The editable form tree.
    Form(VNode),
}

impl CanvasTree {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, CanvasTree::Placeholder(_))
    }

    pub fn root(&self) -> &VNode {
        match self {
            CanvasTree::Placeholder(node) => node,
            CanvasTree::Form(node) => node,
        }
    }
}

/// Project the document into its editable canvas tree.
pub fn render(document: &Document, options: &RenderOptions) -> CanvasTree {
    if document.is_empty() {
        return CanvasTree::Placeholder(placeholder_node());
    }

    let mut form = VNode::element("form")
        .with_class("generated-form")
        .with_attr("id", "generatedForm");

    if let Some(title) = options.title.as_deref().filter(|t| !t.is_empty()) {
        form = form.with_child(
            VNode::element("h2")
                .with_class("form-title")
                .with_child(VNode::text(title)),
        );
    }

    for element in &document.elements {
        form = form.with_child(element_node(document, element, false));
    }
    for row in &document.rows {
        form = form.with_child(row_node(document, row));
    }

    CanvasTree::Form(form)
}

fn placeholder_node() -> VNode {
    VNode::element("div")
        .with_class("drop-placeholder")
        .with_child(VNode::element("i").with_class("fas fa-mouse-pointer"))
        .with_child(
            VNode::element("h3").with_child(VNode::text("Drag & Drop Form Elements Here")),
        )
        .with_child(VNode::element("p").with_child(VNode::text(
            "Start building your form by dragging elements from the sidebar",
        )))
}

fn control_button(action: &str, icon: &str, danger: bool) -> VNode {
    VNode::element("button")
        .with_attr("type", "button")
        .with_class("element-control-btn")
        .with_class(if danger { "btn-delete" } else { "btn-edit" })
        .with_attr("data-action", action)
        .with_child(VNode::element("i").with_class(icon))
}

fn element_node(document: &Document, element: &Element, in_column: bool) -> VNode {
    let mut node = VNode::element("div").with_class("form-element");
    if in_column {
        node = node.with_class("in-column");
    }
    if document.is_element_selected(&element.id) {
        node = node.with_class("selected");
    }
    node = node
        .with_attr("data-element-id", &element.id)
        .with_child(
            VNode::element("div")
                .with_class("element-controls")
                .with_child(control_button("edit", "fas fa-edit", false))
                .with_child(control_button("delete", "fas fa-trash", true)),
        );

    if element.kind.is_button() {
        return node.with_child(field_control(element));
    }

    let mut group = VNode::element("div").with_class("form-group");
    if !element.label.is_empty() {
        let text = if element.required {
            format!("{} *", element.label)
        } else {
            element.label.clone()
        };
        group = group.with_child(
            VNode::element("label")
                .with_class("form-label")
                .with_attr("for", &element.id)
                .with_child(VNode::text(text)),
        );
    }
    node.with_child(group.with_child(field_control(element)))
}

/// Build the interactive control for a field. The tag/attribute mapping
/// here must stay in lockstep with the export markup generator; only the
/// wrapper classes differ between the two projections.
fn field_control(element: &Element) -> VNode {
    match element.kind {
        FieldKind::Textarea => {
            let mut node = VNode::element("textarea")
                .with_class("form-textarea")
                .with_attr("id", &element.id)
                .with_attr("name", &element.id)
                .with_attr("placeholder", &element.placeholder);
            if element.required {
                node = node.with_attr("required", "");
            }
            node
        }

        FieldKind::Select => {
            let mut node = VNode::element("select")
                .with_class("form-select")
                .with_attr("id", &element.id)
                .with_attr("name", &element.id);
            if element.required {
                node = node.with_attr("required", "");
            }
            if !element.placeholder.is_empty() {
                node = node.with_child(
                    VNode::element("option")
                        .with_attr("value", "")
                        .with_child(VNode::text(&element.placeholder)),
                );
            }
            for option in element.options.iter().flatten() {
                node = node.with_child(
                    VNode::element("option")
                        .with_attr("value", option)
                        .with_child(VNode::text(option)),
                );
            }
            node
        }

        FieldKind::Radio => {
            let mut group = VNode::element("div").with_class("radio-group");
            for (index, option) in element.options.iter().flatten().enumerate() {
                let item_id = format!("{}_{}", element.id, index);
                let mut input = VNode::element("input")
                    .with_attr("type", "radio")
                    .with_attr("id", &item_id)
                    .with_attr("name", &element.id)
                    .with_attr("value", option);
                // Only the first radio carries the required flag.
                if element.required && index == 0 {
                    input = input.with_attr("required", "");
                }
                group = group.with_child(
                    VNode::element("div")
                        .with_class("radio-item")
                        .with_child(input)
                        .with_child(
                            VNode::element("label")
                                .with_attr("for", &item_id)
                                .with_child(VNode::text(option)),
                        ),
                );
            }
            group
        }

        FieldKind::Checkbox => checkbox_control(element),

        FieldKind::Submit | FieldKind::Reset => VNode::element("button")
            .with_attr("type", element.kind.as_str())
            .with_class("form-button")
            .with_class(&format!("btn-{}", element.kind.as_str()))
            .with_attr("id", &element.id)
            .with_child(VNode::text(&element.label)),

        FieldKind::Text
        | FieldKind::Email
        | FieldKind::Password
        | FieldKind::Number
        | FieldKind::Tel
        | FieldKind::Url
        | FieldKind::File
        | FieldKind::Date
        | FieldKind::Time => {
            let mut node = VNode::element("input")
                .with_attr("type", element.kind.as_str())
                .with_class("form-input")
                .with_attr("id", &element.id)
                .with_attr("name", &element.id)
                .with_attr("placeholder", &element.placeholder);
            if element.required {
                node = node.with_attr("required", "");
            }
            node
        }
    }
}

fn checkbox_control(element: &Element) -> VNode {
    let options = element.options.as_deref().unwrap_or(&[]);

    if options.len() > 1 {
        let mut group = VNode::element("div").with_class("checkbox-group");
        for (index, option) in options.iter().enumerate() {
            let item_id = format!("{}_{}", element.id, index);
            group = group.with_child(
                VNode::element("div")
                    .with_class("checkbox-item")
                    .with_child(
                        VNode::element("input")
                            .with_attr("type", "checkbox")
                            .with_attr("id", &item_id)
                            .with_attr("name", &format!("{}[]", element.id))
                            .with_attr("value", option),
                    )
                    .with_child(
                        VNode::element("label")
                            .with_attr("for", &item_id)
                            .with_child(VNode::text(option)),
                    ),
            );
        }
        return group;
    }

    let label = options
        .first()
        .map(|o| o.as_str())
        .unwrap_or("Check this box");
    let mut input = VNode::element("input")
        .with_attr("type", "checkbox")
        .with_attr("id", &element.id)
        .with_attr("name", &element.id)
        .with_attr("value", "yes");
    if element.required {
        input = input.with_attr("required", "");
    }
    VNode::element("div")
        .with_class("checkbox-item")
        .with_child(input)
        .with_child(
            VNode::element("label")
                .with_attr("for", &element.id)
                .with_child(VNode::text(label)),
        )
}

fn row_node(document: &Document, row: &Row) -> VNode {
    let mut node = VNode::element("div")
        .with_class("form-row")
        .with_class(&row.layout_class());
    if document.is_row_selected(&row.id) {
        node = node.with_class("selected");
    }
    node = node.with_attr("data-row-id", &row.id).with_child(
        VNode::element("div")
            .with_class("row-controls")
            .with_child(control_button("edit-row", "fas fa-edit", false))
            .with_child(control_button("delete-row", "fas fa-trash", true)),
    );

    for (column_index, slot) in row.slots.iter().enumerate() {
        let mut zone = VNode::element("div").with_class("column-drop-zone");
        if !slot.is_empty() {
            zone = zone.with_class("has-elements");
        }
        zone = zone
            .with_attr("data-row-id", &row.id)
            .with_attr("data-column-index", column_index.to_string())
            .with_child(
                VNode::element("div")
                    .with_class("drop-hint")
                    .with_child(VNode::text("Drop elements here")),
            );
        for element in slot {
            zone = zone.with_child(element_node(document, element, true));
        }
        node = node.with_child(zone);
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use formstudio_model::{ColumnCount, Element, Row, Selection};

    fn standalone(doc: &mut Document, kind: FieldKind) -> String {
        let id = doc.mint_element_id();
        doc.elements.push(Element::new(&id, kind));
        id
    }

    #[test]
    fn test_empty_document_renders_placeholder() {
        let doc = Document::new();
        let tree = render(&doc, &RenderOptions::default());
        assert!(tree.is_placeholder());
        assert!(tree.root().has_class("drop-placeholder"));
    }

    #[test]
    fn test_single_element_renders_one_form_node() {
        let mut doc = Document::new();
        let id = standalone(&mut doc, FieldKind::Text);

        let tree = render(&doc, &RenderOptions::default());
        assert!(!tree.is_placeholder());

        let form = tree.root();
        assert_eq!(form.tag(), Some("form"));
        assert_eq!(form.children().len(), 1);
        assert_eq!(form.children()[0].attr("data-element-id"), Some(id.as_str()));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let mut doc = Document::new();
        standalone(&mut doc, FieldKind::Select);
        doc.rows.push(Row::new("row_1", ColumnCount::Two));

        let options = RenderOptions {
            title: Some("Contact".to_string()),
        };
        assert_eq!(render(&doc, &options), render(&doc, &options));
    }

    #[test]
    fn test_selected_element_carries_class() {
        let mut doc = Document::new();
        let first = standalone(&mut doc, FieldKind::Text);
        let second = standalone(&mut doc, FieldKind::Email);
        doc.select(Selection::Element(second.clone()));

        let tree = render(&doc, &RenderOptions::default());
        let nodes = tree.root().children();
        assert_eq!(nodes[0].attr("data-element-id"), Some(first.as_str()));
        assert!(!nodes[0].has_class("selected"));
        assert!(nodes[1].has_class("selected"));
    }

    #[test]
    fn test_row_renders_column_zones_in_slot_order() {
        let mut doc = Document::new();
        let mut row = Row::new("row_1", ColumnCount::Three);
        let mut element = Element::new("element_1", FieldKind::Text);
        element.parent_row = Some("row_1".to_string());
        element.column_index = Some(1);
        row.slots[1].push(element);
        doc.rows.push(row);

        let tree = render(&doc, &RenderOptions::default());
        let row_node = &tree.root().children()[0];
        assert!(row_node.has_class("row-3col"));

        // First child is the controls block, then one zone per column.
        let zones: Vec<&VNode> = row_node.children()[1..].iter().collect();
        assert_eq!(zones.len(), 3);
        assert!(!zones[0].has_class("has-elements"));
        assert!(zones[1].has_class("has-elements"));
        assert_eq!(zones[1].attr("data-column-index"), Some("1"));
        // The occupied zone holds the drop hint plus the element node.
        assert!(zones[1].children()[1].has_class("in-column"));
    }

    #[test]
    fn test_title_renders_ahead_of_fields() {
        let mut doc = Document::new();
        standalone(&mut doc, FieldKind::Text);

        let tree = render(
            &doc,
            &RenderOptions {
                title: Some("Survey".to_string()),
            },
        );
        let first = &tree.root().children()[0];
        assert_eq!(first.tag(), Some("h2"));
        assert!(first.has_class("form-title"));
    }

    #[test]
    fn test_radio_marks_only_first_option_required() {
        let mut doc = Document::new();
        let id = standalone(&mut doc, FieldKind::Radio);
        doc.find_element_mut(&id).unwrap().required = true;

        let tree = render(&doc, &RenderOptions::default());
        let element_node = &tree.root().children()[0];
        let group = &element_node.children()[1]; // form-group
        let radio_group = group.children().last().unwrap();

        let required_flags: Vec<bool> = radio_group
            .children()
            .iter()
            .map(|item| item.children()[0].attr("required").is_some())
            .collect();
        assert_eq!(required_flags, [true, false, false]);
    }
}
