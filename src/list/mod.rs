//! Paginated list controller kept in sync with the page URL.

pub mod controller;
pub mod filter;
pub mod meta;
pub mod pagination;
pub mod query;
pub mod search;
pub mod table;

pub use controller::{ListController, ListView, Navigation, SearchView};
pub use filter::{FilterDef, FilterOption, FilterPopoverView, OptionsState};
pub use meta::{Page, PageMeta};
pub use pagination::PaginationControls;
pub use query::{ListQueryPatch, ListQueryState, PageSizes, SortOrder, SortSpec, build_url};
pub use search::DebouncedSearch;
pub use table::{CellFormat, ColumnDef, EMPTY_MESSAGE, Record, SortChange, TableRow, TableView};
