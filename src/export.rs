use std::fs;
use std::path::Path;

use crate::style::Theme;
use crate::table::Table;

/// The supported export encodings.
///
/// A closed set dispatched in [`Exporter::to_string`]; adding a format
/// means adding a variant and one match arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// The table rendered with its own current theme.
    #[default]
    Text,
    /// The table re-rendered with [`Theme::Markdown`] forced.
    Markdown,
}

/// Renders tables into an export encoding, optionally writing to a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exporter {
    format: ExportFormat,
}

impl Exporter {
    pub fn new(format: ExportFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// Encodes the table as a string. The source table is never mutated;
    /// theme-forcing formats render a clone.
    pub fn to_string(&self, table: &Table) -> String {
        match self.format {
            ExportFormat::Text => table.render(),
            ExportFormat::Markdown => {
                let mut clone = table.clone();
                clone.set_theme(Theme::Markdown);
                clone.render()
            }
        }
    }

    /// Writes the encoded table to `path`. I/O failure is reported as
    /// `false` rather than propagated; callers must check the result.
    pub fn to_file(&self, table: &Table, path: impl AsRef<Path>) -> bool {
        fs::write(path, self.to_string(table)).is_ok()
    }
}
