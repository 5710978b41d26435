const INDENT: &str = "  ";

/// Line-oriented text builder with two-space indentation.
#[derive(Debug, Default)]
pub(crate) struct SourceWriter {
    output: String,
    depth: usize,
}

impl SourceWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Writes one line at the current depth. Empty lines carry no indentation.
    pub(crate) fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.output.push_str(INDENT);
            }
            self.output.push_str(text);
        }
        self.output.push('\n');
        self
    }

    /// Runs `body` one level deeper.
    pub(crate) fn indented(&mut self, body: impl FnOnce(&mut Self)) -> &mut Self {
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self
    }

    /// Writes `open`, indents, runs `body`, dedents and writes `close`.
    pub(crate) fn scope(
        &mut self,
        open: impl AsRef<str>,
        close: impl AsRef<str>,
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.line(open);
        self.depth += 1;
        body(self);
        self.depth -= 1;
        self.line(close)
    }

    pub(crate) fn finish(self) -> String {
        self.output
    }
}
