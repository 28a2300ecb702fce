/// Accumulates output line by line.
///
/// Unlike a plain `String`, completed lines are kept separate from the line
/// under construction, and padding spaces are emitted as counted runs.
/// Trailing spaces are significant (they are part of a cell's padding) and
/// are never trimmed.
#[derive(Debug, Default)]
pub struct LineBuffer {
    line_buff: Vec<String>,
    doc_buff: Vec<String>,
}

impl LineBuffer {
    pub fn add(&mut self, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.line_buff.push(value.to_string());
        }
        self
    }

    pub fn spaces(&mut self, count: usize) -> &mut Self {
        if count > 0 {
            self.line_buff.push(" ".repeat(count));
        }
        self
    }

    /// Adds `count` repetitions of a glyph's first character. An empty
    /// glyph contributes nothing, which is how a border with no horizontal
    /// glyph yields zero-width rules.
    pub fn repeat(&mut self, glyph: &str, count: usize) -> &mut Self {
        if let Some(ch) = glyph.chars().next() {
            if count > 0 {
                self.line_buff.push(ch.to_string().repeat(count));
            }
        }
        self
    }

    /// Completes the current line with a newline.
    pub fn end_line(&mut self) -> &mut Self {
        let line = self.line_buff.join("");
        self.doc_buff.push(format!("{line}\n"));
        self.line_buff.clear();
        self
    }

    pub fn as_string(&self) -> String {
        debug_assert!(self.line_buff.is_empty(), "unterminated line in buffer");
        self.doc_buff.join("")
    }
}
