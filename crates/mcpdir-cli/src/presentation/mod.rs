//! Shared CLI presentation utilities.
//!
//! Format-only helpers: no catalog access and no domain transforms.

pub mod server_display;
pub mod tables;

pub use server_display::{badges, detail_lines, format_rating, print_server_table, server_row};
pub use tables::{print_separator, truncate_string};
