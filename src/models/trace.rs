/// The span of lines between the first and last occurrence of a search
/// identifier within one file, bounds inclusive.
///
/// Line numbers are 1-based. A file with no occurrence yields the empty
/// window with the 0/0 sentinel bounds - a normal outcome, not an error.
/// The span may contain lines that do not mention the identifier; it is a
/// window, not a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceWindow {
    pub first_line: usize,
    pub last_line: usize,
    pub lines: Vec<String>,
}

impl TraceWindow {
    /// The empty window returned when the identifier never occurs.
    pub fn empty() -> Self {
        TraceWindow::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines in the span (`last - first + 1` for non-empty windows).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
