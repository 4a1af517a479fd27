use serde::{Deserialize, Serialize};

/// Virtual canvas node.
///
/// Attributes are ordered pairs rather than a map so a rendered tree is
/// deterministic and comparable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        children: Vec<VNode>,
    },

    /// Text node
    Text { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.push((key.into(), value.into()));
        }
        self
    }

    /// Append to the `class` attribute, creating it if absent.
    pub fn with_class(mut self, class: &str) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            match attributes.iter_mut().find(|(k, _)| k == "class") {
                Some((_, value)) => {
                    value.push(' ');
                    value.push_str(class);
                }
                None => attributes.push(("class".to_string(), class.to_string())),
            }
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    /// Attribute lookup by key.
    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            VNode::Text { .. } => None,
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag.as_str()),
            VNode::Text { .. } => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            VNode::Text { .. } => &[],
        }
    }

    /// True when the node's `class` attribute contains `class_name`.
    pub fn has_class(&self, class_name: &str) -> bool {
        self.attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class_name))
            .unwrap_or(false)
    }
}
