//! Rendered cell content.

/// Visual emphasis for a rendered cell.
///
/// Status badges map onto tones; the presentation layer decides the colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Default,
    Muted,
    Accent,
    Success,
    Warning,
    Danger,
}

/// What a column renders for one row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellContent {
    /// Display text.
    pub text: String,
    /// Emphasis.
    pub tone: Tone,
}

impl CellContent {
    /// Plain text with the default tone.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Default,
        }
    }

    /// Text with an explicit tone.
    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

impl From<String> for CellContent {
    fn from(text: String) -> Self {
        CellContent::plain(text)
    }
}

impl From<&str> for CellContent {
    fn from(text: &str) -> Self {
        CellContent::plain(text)
    }
}
