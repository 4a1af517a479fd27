//! # Formstudio Canvas
//!
//! Editable projection of a form document.
//!
//! [`render`] is a pure function of the document: it produces either the
//! empty-canvas drop placeholder or a virtual form tree in which every
//! element and row node carries its id (for hit-testing by the input
//! layer), edit/delete control affordances, and a `selected` class on the
//! currently selected node. Rendering twice without an intervening
//! mutation yields an identical tree.

mod renderer;
mod vdom;

pub use renderer::{render, CanvasTree, RenderOptions};
pub use vdom::VNode;
