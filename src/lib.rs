//! # Tabulon
//!
//! A library for building tables in memory and rendering them as aligned,
//! bordered text.
//!
//! Tables are assembled incrementally (header, rows, styling) and rendered
//! to a string with byte-exact layout:
//!
//! - Column widths are derived from content, or pinned per column (pinning
//!   a width smaller than content truncates)
//! - Cells may contain newlines; multiline cells stack within their row and
//!   every column stays vertically aligned
//! - Ten built-in themes select the border glyphs, from plain ASCII grids
//!   to Unicode box drawing and Markdown pipes
//!
//! ## Command-Line Tool
//!
//! This crate includes the `tbl` CLI tool for rendering delimited or JSON
//! input as a table:
//!
//! ```sh
//! # Install
//! cargo install tabulon
//!
//! # Render tab-separated input from stdin
//! printf 'Name\tAge\nAlice\t30\n' | tbl
//!
//! # Render a CSV-ish file with a Unicode border
//! tbl -d , --theme unicode-single data.csv
//!
//! # Render a JSON array of objects as Markdown
//! tbl --json --markdown data.json
//! ```
//!
//! Run `tbl --help` for all options.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabulon::{Table, Theme};
//!
//! let mut table = Table::new();
//! table
//!     .set_header(["Name", "Age"])
//!     .add_row(["Alice", "30"])
//!     .add_row(["Bob", "25"]);
//!
//! println!("{}", table.render());
//! ```
//!
//! produces:
//!
//! ```text
//! +-------+-----+
//! | Name  | Age |
//! +-------+-----+
//! | Alice | 30  |
//! +-------+-----+
//! | Bob   | 25  |
//! +-------+-----+
//! ```
//!
//! ## Styling
//!
//! A [`Theme`] selects a [`Border`] glyph set; alignment is configured per
//! column with per-cell overrides:
//!
//! ```rust
//! use tabulon::{Alignment, Table, Theme};
//!
//! let mut table = Table::new();
//! table
//!     .set_header(["Item", "Price"])
//!     .add_row(["Apple", "1.25"])
//!     .set_theme(Theme::UnicodeSingle)
//!     .set_column_alignment(1, Alignment::Right);
//! ```
//!
//! [`Theme::None`] disables every border and separator line while cell
//! padding still applies, which is useful for plain columnar output.
//!
//! ## Building from Rust Types
//!
//! Any sequence of types implementing [`serde::Serialize`] can become a
//! table directly:
//!
//! ```rust
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Player {
//!     name: String,
//!     score: u32,
//! }
//!
//! let players = vec![
//!     Player { name: "Alice".into(), score: 95 },
//!     Player { name: "Bob".into(), score: 87 },
//! ];
//!
//! let table = tabulon::table_from(&players).unwrap();
//! println!("{table}");
//! ```
//!
//! ## Exporting
//!
//! The export layer wraps rendering for a closed set of encodings and can
//! write straight to a file, reporting I/O failure as a boolean:
//!
//! ```rust,no_run
//! use tabulon::{Exporter, ExportFormat, Table};
//!
//! let mut table = Table::new();
//! table.set_header(["A"]).add_row(["1"]);
//!
//! let markdown = Exporter::new(ExportFormat::Markdown);
//! let ok = markdown.to_file(&table, "table.md");
//! assert!(ok);
//! ```

mod buffer;
mod cell;
mod convert;
mod error;
mod export;
mod layout;
mod row;
mod style;
mod table;

pub use crate::cell::Cell;
pub use crate::convert::{table_from, table_from_value};
pub use crate::error::TabulonError;
pub use crate::export::{ExportFormat, Exporter};
pub use crate::row::Row;
pub use crate::style::{Alignment, Border, Theme};
pub use crate::table::Table;
