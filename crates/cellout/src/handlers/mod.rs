//! Built-in output handlers.
//!
//! Each handler pairs a structural predicate with a renderer. The registry
//! seeds them in the order documented in [`crate::registry`]; container
//! handlers (`row-collection`, `matrix`, `array`) only claim top-level values
//! so nested elements render compactly.

mod array;
mod date;
mod inspect;
mod literal;
mod matrix;
mod scalar;
mod self_render;
mod table;

pub use array::ArrayHandler;
pub use date::DateHandler;
pub use inspect::{Inspector, InspectorHandler};
pub use literal::{NullHandler, UndefinedHandler};
pub use matrix::{make_matrix_text, MatrixHandler};
pub use scalar::ScalarHandler;
pub use self_render::SelfRenderHandler;
pub use table::RowCollectionHandler;

/// The summary line shown above container output.
pub(crate) fn data_set_info(text: impl Into<String>) -> crate::markup::Element {
    crate::markup::Element::new("div")
        .class("data-set-info")
        .text(text)
}
