use super::color::ChatColor;

/// One piece of a chat line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Color(ChatColor),
    Reset,
}

/// A single chat line with color markers kept as data.
///
/// Renderers turn it into legacy `§` codes, ANSI escapes or plain text at the
/// output boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedLine {
    spans: Vec<Span>,
}

impl FormattedLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: ChatColor) -> Self {
        self.spans.push(Span::Color(color));
        self
    }

    pub fn reset(mut self) -> Self {
        self.spans.push(Span::Reset);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.spans.push(Span::Text(text));
        }
        self
    }

    /// Shorthand for `.color(c).text(t)`
    pub fn colored(self, color: ChatColor, text: impl Into<String>) -> Self {
        self.color(color).text(text)
    }

    pub fn append(mut self, other: FormattedLine) -> Self {
        self.spans.extend(other.spans);
        self
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// True when the line has no visible text
    pub fn is_empty(&self) -> bool {
        !self.spans.iter().any(|s| matches!(s, Span::Text(_)))
    }

    pub fn plain(&self) -> String {
        self.spans
            .iter()
            .filter_map(|s| match s {
                Span::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Minecraft legacy formatting (`§a`, `§r`)
    pub fn to_legacy(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            match span {
                Span::Text(t) => out.push_str(t),
                Span::Color(c) => {
                    out.push('§');
                    out.push(c.code());
                }
                Span::Reset => out.push_str("§r"),
            }
        }
        out
    }

    /// Terminal rendering, always ends with a reset
    pub fn to_ansi(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            match span {
                Span::Text(t) => out.push_str(t),
                Span::Color(c) => out.push_str(c.ansi()),
                Span::Reset => out.push_str("\x1b[0m"),
            }
        }
        out.push_str("\x1b[0m");
        out
    }
}
