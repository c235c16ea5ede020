//! Console color scheme.

use hrconsole_lib::Tone;

use super::buffer::{Rgb, Style};

/// Named colors used by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub accent: Rgb,
    pub success: Rgb,
    pub warning: Rgb,
    pub danger: Rgb,
    /// Row under the cursor.
    pub cursor: Rgb,
    /// Selected rows.
    pub selected: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb::hex(0x11111b),
            surface: Rgb::hex(0x1e1e2e),
            text: Rgb::hex(0xcdd6f4),
            muted: Rgb::hex(0x7f849c),
            accent: Rgb::hex(0x89b4fa),
            success: Rgb::hex(0xa6e3a1),
            warning: Rgb::hex(0xf9e2af),
            danger: Rgb::hex(0xf38ba8),
            cursor: Rgb::hex(0xa277ff),
            selected: Rgb::hex(0x6e5494),
        }
    }
}

impl Theme {
    /// Plain text on the background.
    pub fn base(&self) -> Style {
        Style::new(self.text, self.background)
    }

    /// Text on the toolbar/header surface.
    pub fn surface(&self) -> Style {
        Style::new(self.text, self.surface)
    }

    pub fn muted(&self) -> Style {
        Style::new(self.muted, self.background)
    }

    /// Foreground color of a cell tone.
    pub fn tone(&self, tone: Tone) -> Rgb {
        match tone {
            Tone::Default => self.text,
            Tone::Muted => self.muted,
            Tone::Accent => self.accent,
            Tone::Success => self.success,
            Tone::Warning => self.warning,
            Tone::Danger => self.danger,
        }
    }
}
