use crate::style::Alignment;

/// A single table cell: a string value plus an optional alignment override.
///
/// A cell without its own alignment falls back to its column's alignment
/// when rendered. Values may contain embedded newlines; such cells occupy
/// several stacked physical lines within one logical row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    value: String,
    alignment: Option<Alignment>,
}

impl Cell {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            alignment: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = value.into();
        self
    }

    /// The cell's own alignment override, if any.
    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }

    /// Removes the override so the column alignment applies again.
    pub fn reset_alignment(&mut self) -> &mut Self {
        self.alignment = None;
        self
    }

    /// Builder-style variant of [`set_alignment`](Self::set_alignment).
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// The rendered width of this cell: the character length of its longest
    /// line. An empty value has width 0.
    pub fn width(&self) -> usize {
        self.lines().map(|line| line.chars().count()).max().unwrap_or(0)
    }

    /// The cell value split on newlines. An empty value still yields one
    /// (empty) line, so every cell occupies at least one physical line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.value.split('\n')
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
