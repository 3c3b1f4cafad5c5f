//! Stateless table rendering with server-side sorting.

use chrono::DateTime;
use serde::Serialize;
use serde_json::Value;

use crate::list::query::{ListQueryPatch, ListQueryState, SortOrder, SortSpec, build_url};

/// Text of the single row shown when a page has no rows.
pub const EMPTY_MESSAGE: &str = "No results found";

/// An untyped row as returned by the backend.
pub type Record = serde_json::Map<String, Value>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellFormat {
    Text,
    Boolean,
    Date,
    /// Integer amount in cents shown with two decimals.
    Money,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    /// Field name, dotted for nested objects (`course.title`). Also the
    /// `sortBy` value sent to the backend.
    pub id: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    pub format: CellFormat,
}

impl ColumnDef {
    pub const fn new(id: &'static str, header: &'static str) -> Self {
        Self {
            id,
            header,
            sortable: false,
            format: CellFormat::Text,
        }
    }

    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub const fn format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }
}

/// A row the table can render. The table knows nothing about the row beyond
/// what the column definitions ask for.
pub trait TableRow {
    fn cell(&self, column: &ColumnDef) -> String;

    fn row_id(&self) -> Option<String> {
        None
    }
}

fn lookup<'a>(record: &'a Record, path: &str) -> Option<&'a Value> {
    let mut parts = path.split('.');
    let mut current = record.get(parts.next()?)?;
    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

fn format_value(value: &Value, format: CellFormat) -> String {
    match (format, value) {
        (_, Value::Null) => String::new(),
        (CellFormat::Boolean, Value::Bool(flag)) => (if *flag { "Yes" } else { "No" }).to_string(),
        (CellFormat::Date, Value::String(raw)) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|_| raw.clone()),
        (CellFormat::Money, Value::Number(number)) => match number.as_i64() {
            Some(cents) => {
                let sign = if cents < 0 { "-" } else { "" };
                let cents = cents.unsigned_abs();
                format!("{sign}{}.{:02}", cents / 100, cents % 100)
            }
            None => number.to_string(),
        },
        (_, Value::String(text)) => text.clone(),
        (_, Value::Array(items)) => items
            .iter()
            .map(|item| format_value(item, CellFormat::Text))
            .collect::<Vec<_>>()
            .join(", "),
        (_, other) => other.to_string(),
    }
}

impl TableRow for Record {
    fn cell(&self, column: &ColumnDef) -> String {
        lookup(self, column.id)
            .map(|value| format_value(value, column.format))
            .unwrap_or_default()
    }

    fn row_id(&self) -> Option<String> {
        match self.get("id")? {
            Value::Number(id) => Some(id.to_string()),
            Value::String(id) if !id.is_empty() => Some(id.clone()),
            _ => None,
        }
    }
}

/// Sort-change event emitted by a column header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortChange {
    Set(SortSpec),
    Cleared,
}

impl SortChange {
    pub fn into_sort(self) -> Option<SortSpec> {
        match self {
            SortChange::Set(sort) => Some(sort),
            SortChange::Cleared => None,
        }
    }
}

/// Header click cycle: unsorted → ascending → descending → unsorted.
/// Clicking another column starts it ascending.
pub fn toggle_sort(current: Option<&SortSpec>, column: &str) -> SortChange {
    match current {
        Some(sort) if sort.column == column => match sort.order {
            SortOrder::Asc => SortChange::Set(SortSpec::desc(column)),
            SortOrder::Desc => SortChange::Cleared,
        },
        _ => SortChange::Set(SortSpec::asc(column)),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub id: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub sort: Option<SortOrder>,
    pub href: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub id: Option<String>,
    pub cells: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RowView>,
    pub column_count: usize,
    /// Set when there are no rows; rendered as one row spanning all columns.
    pub empty_message: Option<&'static str>,
}

impl TableView {
    /// Rows are rendered in the order given; they are never re-sorted here.
    pub fn new<T: TableRow>(
        path: &str,
        state: &ListQueryState,
        columns: &[ColumnDef],
        data: &[T],
    ) -> Self {
        let headers = columns
            .iter()
            .map(|column| {
                let sort = state
                    .sort
                    .as_ref()
                    .filter(|sort| sort.column == column.id)
                    .map(|sort| sort.order);
                let href = column.sortable.then(|| {
                    let change = toggle_sort(state.sort.as_ref(), column.id);
                    build_url(
                        path,
                        state,
                        &ListQueryPatch::new().set_sort(change.into_sort()),
                    )
                });
                HeaderCell {
                    id: column.id,
                    label: column.header,
                    sortable: column.sortable,
                    sort,
                    href,
                }
            })
            .collect();

        let rows = data
            .iter()
            .map(|row| RowView {
                id: row.row_id(),
                cells: columns.iter().map(|column| row.cell(column)).collect(),
            })
            .collect::<Vec<_>>();

        Self {
            headers,
            empty_message: rows.is_empty().then_some(EMPTY_MESSAGE),
            rows,
            column_count: columns.len().max(1),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
