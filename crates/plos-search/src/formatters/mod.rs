//! Text rendering of pages and article details.
//!
//! Pure `String`-producing functions; no I/O. The CLI decides where the
//! output goes.

mod detail;
mod table;

pub use detail::format_detail;
pub use table::{format_page, format_pagination, format_results_count, highlight};
