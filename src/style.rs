/// Horizontal alignment of cell content within its column.
///
/// Alignment is resolved through a fallback chain at render time: a cell's
/// own override wins, then the column default, then [`Alignment::Left`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Content flush left, padding on the right. This is the default.
    #[default]
    Left,
    /// Content centered; an odd leftover space goes to the right.
    Center,
    /// Content flush right, padding on the left.
    Right,
}

/// The set of glyphs used to draw a table's frame.
///
/// A border is eleven strings: the horizontal and vertical rules, four
/// corners, four edge intersections, and the cross where interior rules
/// meet. Glyphs may be empty; a border whose horizontal *and* vertical
/// glyphs are both empty is disabled and suppresses every rule line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    horizontal: String,
    vertical: String,
    top_left: String,
    top_right: String,
    bottom_left: String,
    bottom_right: String,
    top_intersection: String,
    bottom_intersection: String,
    left_intersection: String,
    right_intersection: String,
    cross_intersection: String,
}

impl Default for Border {
    fn default() -> Self {
        Self::ascii()
    }
}

impl Border {
    /// Creates a border from its eleven glyphs.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        horizontal: impl Into<String>,
        vertical: impl Into<String>,
        top_left: impl Into<String>,
        top_right: impl Into<String>,
        bottom_left: impl Into<String>,
        bottom_right: impl Into<String>,
        top_intersection: impl Into<String>,
        bottom_intersection: impl Into<String>,
        left_intersection: impl Into<String>,
        right_intersection: impl Into<String>,
        cross_intersection: impl Into<String>,
    ) -> Self {
        Self {
            horizontal: horizontal.into(),
            vertical: vertical.into(),
            top_left: top_left.into(),
            top_right: top_right.into(),
            bottom_left: bottom_left.into(),
            bottom_right: bottom_right.into(),
            top_intersection: top_intersection.into(),
            bottom_intersection: bottom_intersection.into(),
            left_intersection: left_intersection.into(),
            right_intersection: right_intersection.into(),
            cross_intersection: cross_intersection.into(),
        }
    }

    fn uniform(glyph: &str) -> Self {
        Self::new(
            glyph, glyph, glyph, glyph, glyph, glyph, glyph, glyph, glyph, glyph, glyph,
        )
    }

    /// All glyphs empty; disables every border and separator line.
    pub fn none() -> Self {
        Self::uniform("")
    }

    /// Plain `+`/`-`/`|` grid. Also the [`Default`] border.
    pub fn ascii() -> Self {
        Self::new("-", "|", "+", "+", "+", "+", "+", "+", "+", "+", "+")
    }

    /// Single-line Unicode box drawing.
    pub fn unicode_single() -> Self {
        Self::new("─", "│", "┌", "┐", "└", "┘", "┬", "┴", "├", "┤", "┼")
    }

    /// Double-line Unicode box drawing.
    pub fn unicode_double() -> Self {
        Self::new("═", "║", "╔", "╗", "╚", "╝", "╦", "╩", "╠", "╣", "╬")
    }

    pub fn horizontal(&self) -> &str {
        &self.horizontal
    }
    pub fn vertical(&self) -> &str {
        &self.vertical
    }
    pub fn top_left(&self) -> &str {
        &self.top_left
    }
    pub fn top_right(&self) -> &str {
        &self.top_right
    }
    pub fn bottom_left(&self) -> &str {
        &self.bottom_left
    }
    pub fn bottom_right(&self) -> &str {
        &self.bottom_right
    }
    pub fn top_intersection(&self) -> &str {
        &self.top_intersection
    }
    pub fn bottom_intersection(&self) -> &str {
        &self.bottom_intersection
    }
    pub fn left_intersection(&self) -> &str {
        &self.left_intersection
    }
    pub fn right_intersection(&self) -> &str {
        &self.right_intersection
    }
    pub fn cross_intersection(&self) -> &str {
        &self.cross_intersection
    }

    /// Whether this border draws anything at all.
    ///
    /// Deliberately an OR: a border with an empty horizontal glyph but a
    /// non-empty vertical one is still enabled, and its top/bottom rules
    /// render with zero-width runs between the corner glyphs.
    pub fn enabled(&self) -> bool {
        !self.horizontal.is_empty() || !self.vertical.is_empty()
    }
}

/// A named border style.
///
/// Each theme maps to exactly one [`Border`]; nothing else in the crate
/// depends on theme identity. Adding a theme means adding one arm to
/// [`Theme::border`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// No borders or separators; cells are still padded.
    None,
    /// Full ASCII grid. This is the default.
    #[default]
    Grid,
    /// Unicode single-line box drawing.
    UnicodeSingle,
    /// Unicode double-line box drawing.
    UnicodeDouble,
    /// Markdown-style pipes.
    Markdown,
    /// Horizontal rules only, drawn with spaces for vertical glyphs.
    Minimal,
    /// Every glyph an interpunct.
    Dotted,
    /// Decorative double-line frame.
    Fancy,
    /// Single-line box drawing with rounded corners.
    Rounded,
    /// Heavy (thick) Unicode box drawing.
    Heavy,
}

impl Theme {
    /// Returns the border this theme selects. Total over every variant.
    pub fn border(&self) -> Border {
        match self {
            Theme::None => Border::none(),
            Theme::Grid => Border::ascii(),
            Theme::UnicodeSingle => Border::unicode_single(),
            Theme::UnicodeDouble | Theme::Fancy => Border::unicode_double(),
            Theme::Markdown => Border::new("-", "|", "|", "|", "|", "|", "|", "|", "|", "|", "|"),
            Theme::Minimal => Border::new("-", " ", " ", " ", " ", " ", " ", " ", " ", " ", " "),
            Theme::Dotted => Border::uniform("·"),
            Theme::Rounded => Border::new("─", "│", "╭", "╮", "╰", "╯", "┬", "┴", "├", "┤", "┼"),
            Theme::Heavy => Border::new("━", "┃", "┏", "┓", "┗", "┛", "┳", "┻", "┣", "┫", "╋"),
        }
    }
}
