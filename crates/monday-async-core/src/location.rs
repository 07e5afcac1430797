//! Mapping of server-reported positions onto the query text.

/// A position in the query text where the server reported an error.
///
/// Holds the 1-based line and column as reported, plus numbered display
/// strings for the erroring line and its neighbours. A display string is
/// `None` when its line number falls outside the query text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    line: usize,
    column: usize,
    prev_line: Option<String>,
    error_line: Option<String>,
    next_line: Option<String>,
}

impl Location {
    /// Resolve `line`/`column` against the lines of a formatted query.
    ///
    /// Never fails: positions outside the text simply produce fewer display
    /// lines.
    pub fn resolve(lines: &[&str], line: usize, column: usize) -> Self {
        let total = lines.len();
        let numbered = |n: usize| -> Option<String> {
            if n >= 1 && n <= total {
                Some(format!("{n}) {}", lines[n - 1]))
            } else {
                None
            }
        };

        Self {
            line,
            column,
            prev_line: if line > 1 { numbered(line - 1) } else { None },
            error_line: numbered(line),
            next_line: if line < total { numbered(line + 1) } else { None },
        }
    }

    /// Resolve `line`/`column` against a query string.
    pub fn from_query(query: &str, line: usize, column: usize) -> Self {
        let lines: Vec<&str> = query.lines().collect();
        Self::resolve(&lines, line, column)
    }

    /// The reported line (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// The reported column (1-based).
    pub fn column(&self) -> usize {
        self.column
    }

    /// The line before the erroring one, as `"N) text"`.
    pub fn prev_line(&self) -> Option<&str> {
        self.prev_line.as_deref()
    }

    /// The erroring line, as `"N) text"`.
    pub fn error_line(&self) -> Option<&str> {
        self.error_line.as_deref()
    }

    /// The line after the erroring one, as `"N) text"`.
    pub fn next_line(&self) -> Option<&str> {
        self.next_line.as_deref()
    }

    /// A marker line with `^` under the reported column of the error line.
    ///
    /// The offset accounts for the `"N) "` label so the caret lines up when
    /// printed at the same margin as [`error_line`](Self::error_line).
    /// Returns `None` when the error line itself is out of range. A column
    /// past the end of the line puts the caret one past its last character.
    pub fn caret(&self) -> Option<String> {
        let error_line = self.error_line.as_deref()?;
        let label_width = format!("{}) ", self.line).len();
        let text_width = error_line.chars().count().saturating_sub(label_width);
        let column = self.column.clamp(1, text_width.saturating_add(1));
        let offset = label_width.saturating_add(column - 1);
        Some(format!("{}^", " ".repeat(offset)))
    }

    /// Append the rendered location block to `out`, one entry per line.
    pub(crate) fn render_into(&self, out: &mut Vec<String>, margin: &str, line_margin: &str) {
        out.push(format!(
            "{margin}Location: Line {}, Column {}",
            self.line, self.column
        ));

        if let Some(prev) = &self.prev_line {
            out.push(format!("{line_margin}{prev}"));
        }
        if let Some(error) = &self.error_line {
            out.push(format!("{line_margin}{error}"));
        }
        if let Some(caret) = self.caret() {
            out.push(format!("{line_margin}{caret}"));
        }
        if let Some(next) = &self.next_line {
            out.push(format!("{line_margin}{next}"));
        }
    }
}
