//! # Formstudio HTML Compiler
//!
//! Compiles a form document to a standalone, dependency-free HTML page:
//! doctype, head with the stylesheet reference, the `<form>` body, and the
//! validation-script tag. The per-kind field markup follows the same
//! mapping as the canvas renderer; only the editing affordances and
//! wrapper classes differ.

mod compiler;


pub use compiler::{compile_document, CompileOptions};
