//! Tabular rendering for row collections.
//!
//! A row collection (a non-empty array of objects sharing one key set) renders
//! as a paged table:
//!
//! ```text
//! <div>
//!   <div class="data-set-info">array of objects: 25 rows, 2 columns</div>
//!   <div class="paged-table" data-rows="25" data-page-size="10" data-pages="3">
//!     <div class="pagination pagination-top">…controls…</div>
//!     <table>
//!       <thead>…one <th> per key of the first row…</thead>
//!       <tbody data-page="0">…</tbody>
//!       <tbody data-page="1" hidden>…</tbody>
//!       <tbody data-page="2" hidden>…</tbody>
//!     </table>
//!   </div>
//! </div>
//! ```
//!
//! Each cell is rendered through the dispatcher with `in_container = true`.

use cellout_value::{shape, Value};

use super::data_set_info;
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::handler::Handler;
use crate::markup::Element;
use crate::result::RenderResult;

#[derive(Debug, Clone, Copy, Default)]
pub struct RowCollectionHandler;

impl Handler for RowCollectionHandler {
    fn name(&self) -> &str {
        "row-collection"
    }

    fn should_handle(&self, value: &Value, cx: &RenderContext<'_>) -> bool {
        !cx.in_container && shape::is_row_collection(value)
    }

    fn render(&self, value: &Value, cx: &RenderContext<'_>) -> Result<RenderResult, RenderError> {
        let Some(rows) = value.as_array() else {
            return Ok(RenderResult::Invalid);
        };
        let columns = shape::column_keys(value);
        let page_size = rows.len().min(cx.config().page_size).max(1);
        let page_count = rows.len().div_ceil(page_size);

        let info = format!(
            "array of objects: {} rows, {} columns",
            rows.len(),
            columns.len()
        );

        let header = Element::new("thead").child(
            Element::new("tr").children(
                columns
                    .iter()
                    .map(|key| Element::new("th").text(key.as_str())),
            ),
        );

        let mut table = Element::new("table").child(header);
        for (page, chunk) in rows.chunks(page_size).enumerate() {
            let mut body = Element::new("tbody").attr("data-page", page.to_string());
            if page > 0 {
                body = body.flag("hidden");
            }
            for row in chunk {
                body.push(render_row(row, &columns, cx)?);
            }
            table.push(body);
        }

        let paged = Element::new("div")
            .class("paged-table")
            .attr("data-rows", rows.len().to_string())
            .attr("data-page-size", page_size.to_string())
            .attr("data-pages", page_count.to_string())
            .child(pagination(page_size, page_count, &cx.config().page_size_options))
            .child(table);

        Ok(Element::new("div")
            .child(data_set_info(info))
            .child(paged)
            .into())
    }
}

fn render_row(
    row: &Value,
    columns: &[String],
    cx: &RenderContext<'_>,
) -> Result<Element, RenderError> {
    let mut tr = Element::new("tr");
    for key in columns {
        let nodes = match row.as_object().and_then(|obj| obj.get(key)) {
            Some(cell) => cx.nested_nodes(cell)?,
            None => cx.nested_nodes(&Value::Undefined)?,
        };
        tr.push(Element::new("td").children(nodes));
    }
    Ok(tr)
}

/// Pagination controls, shown above the table only.
fn pagination(page_size: usize, page_count: usize, options: &[usize]) -> Element {
    let select = Element::new("select").class("page-size").children(
        options.iter().map(|&size| {
            let option = Element::new("option")
                .attr("value", size.to_string())
                .text(format!("{} rows", size));
            if size == page_size {
                option.flag("selected")
            } else {
                option
            }
        }),
    );

    Element::new("div")
        .class("pagination pagination-top")
        .child(
            Element::new("button")
                .class("page-prev")
                .flag("disabled")
                .text("Previous"),
        )
        .child(
            Element::new("span")
                .class("page-info")
                .text(format!("Page 1 of {}", page_count)),
        )
        .child(select)
        .child(
            Element::new("button")
                .class("page-next")
                .text("Next"),
        )
}
