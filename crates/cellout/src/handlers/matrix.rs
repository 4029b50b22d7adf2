//! Truncated grid previews for numeric matrices.

use std::iter;

use cellout_value::{format_number, shape, Value};

use super::data_set_info;
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::handler::Handler;
use crate::markup::Element;
use crate::result::RenderResult;
use crate::util::truncate_to_width;

/// Marker for elided columns.
const COL_GAP: &str = "…";
/// Marker for elided rows.
const ROW_GAP: &str = "⋮";
/// Marker where elided rows and columns cross.
const CROSS_GAP: &str = "⋱";

#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixHandler;

impl Handler for MatrixHandler {
    fn name(&self) -> &str {
        "matrix"
    }

    fn should_handle(&self, value: &Value, cx: &RenderContext<'_>) -> bool {
        !cx.in_container && shape::is_matrix(value)
    }

    fn render(&self, value: &Value, cx: &RenderContext<'_>) -> Result<RenderResult, RenderError> {
        let Some((rows, cols)) = shape::shape(value) else {
            return Ok(RenderResult::Invalid);
        };
        let config = cx.config();
        let text = make_matrix_text(
            value,
            config.matrix_preview_rows,
            config.matrix_preview_cols,
            config.matrix_cell_width,
        );

        let body = Element::new("tbody").children(text.into_iter().map(|row| {
            Element::new("tr").children(row.into_iter().map(|cell| Element::new("td").text(cell)))
        }));

        Ok(Element::new("div")
            .child(data_set_info(format!(
                "{} × {} matrix (array of arrays)",
                rows, cols
            )))
            .child(Element::new("table").class("simple-table").child(body))
            .into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Slot {
    Index(usize),
    Gap,
}

/// Picks which indices of `len` to show within `max` slots, keeping both ends.
fn window(len: usize, max: usize) -> Vec<Slot> {
    if len <= max {
        return (0..len).map(Slot::Index).collect();
    }
    let head = max.div_ceil(2);
    let tail = max - head;
    (0..head)
        .map(Slot::Index)
        .chain(iter::once(Slot::Gap))
        .chain((len - tail..len).map(Slot::Index))
        .collect()
}

/// Formats a matrix preview as rows of cell text.
///
/// At most `max_rows` × `max_cols` numbers are shown, split between the
/// leading and trailing rows/columns, with gap markers where values were
/// elided. Each number is truncated to `cell_width` display columns.
///
/// ```rust
/// use cellout::handlers::make_matrix_text;
/// use cellout::Value;
/// use serde_json::json;
///
/// let m = Value::from(json!([[1, 2, 3], [4, 5, 6]]));
/// assert_eq!(
///     make_matrix_text(&m, 10, 2, 8),
///     [["1", "…", "3"], ["4", "…", "6"]]
/// );
/// ```
pub fn make_matrix_text(
    value: &Value,
    max_rows: usize,
    max_cols: usize,
    cell_width: usize,
) -> Vec<Vec<String>> {
    let Some(rows) = value.as_array() else {
        return Vec::new();
    };
    let width = rows
        .first()
        .and_then(Value::as_array)
        .map_or(0, |cells| cells.len());
    let col_slots = window(width, max_cols);

    window(rows.len(), max_rows)
        .into_iter()
        .map(|row_slot| {
            let cells = match row_slot {
                Slot::Index(r) => rows[r].as_array(),
                Slot::Gap => None,
            };
            col_slots
                .iter()
                .map(|col_slot| match (cells, col_slot) {
                    (Some(cells), Slot::Index(c)) => cells
                        .get(*c)
                        .map(|cell| cell_text(cell, cell_width))
                        .unwrap_or_default(),
                    (Some(_), Slot::Gap) => COL_GAP.to_string(),
                    (None, Slot::Index(_)) => ROW_GAP.to_string(),
                    (None, Slot::Gap) => CROSS_GAP.to_string(),
                })
                .collect()
        })
        .collect()
}

fn cell_text(cell: &Value, width: usize) -> String {
    match cell.as_f64() {
        Some(n) => truncate_to_width(&format_number(n), width),
        None => String::new(),
    }
}
