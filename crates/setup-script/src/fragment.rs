//! Ordered command lines.

use std::fmt;

/// An ordered sequence of script lines.
///
/// Lines keep insertion order; rendering terminates every line with `\n`.
/// Order is significant: coverage setup relies on disable-before-enable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScriptFragment {
    lines: Vec<String>,
}

impl ScriptFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fragment holding a single line.
    pub fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Move every line of `other` to the end of this fragment.
    pub fn append(&mut self, other: ScriptFragment) {
        self.lines.extend(other.lines);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    /// Render as script text, one `\n`-terminated line per entry.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for ScriptFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<S: Into<String>> FromIterator<S> for ScriptFragment {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for ScriptFragment {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.lines.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for ScriptFragment {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_renders_nothing() {
        let fragment = ScriptFragment::new();
        assert!(fragment.is_empty());
        assert_eq!(fragment.render(), "");
    }

    #[test]
    fn test_render_terminates_every_line() {
        let mut fragment = ScriptFragment::line("step_log \"Setup Extensions\"");
        fragment.push("Add-Extension pcov");
        assert_eq!(
            fragment.render(),
            "step_log \"Setup Extensions\"\nAdd-Extension pcov\n"
        );
        assert_eq!(fragment.to_string(), fragment.render());
    }

    #[test]
    fn test_append_keeps_order() {
        let mut first: ScriptFragment = ["a", "b"].into_iter().collect();
        let second: ScriptFragment = ["c"].into_iter().collect();
        first.append(second);
        assert_eq!(first.lines(), ["a", "b", "c"]);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_contains_matches_substrings() {
        let fragment = ScriptFragment::line("Add-Extension mysqli");
        assert!(fragment.contains("mysqli"));
        assert!(fragment.contains("mysql"));
        assert!(!fragment.contains("pcov"));
    }
}
