use std::time::{Duration, Instant};

use hrconsole_lib::Outcome;
use hrconsole_lib::error::ActionError;

use crate::ui::text::{display_width, truncate_to_width};
use crate::ui::{Buffer, Rect, Style, Theme};

/// Width of a toast line, borders excluded.
const TOAST_WIDTH: u16 = 44;
/// At most this many toasts are drawn at once.
const MAX_VISIBLE: usize = 5;

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, message)
    }

    fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Turn an action outcome into a notification.
    ///
    /// Refusals the operator can fix (wrong state, bad input) are warnings;
    /// anything else that failed is an error.
    pub fn from_outcome(outcome: &Outcome) -> Self {
        match outcome {
            Ok(success) => Toast::success(&success.message),
            Err(err @ (ActionError::InvalidTransition { .. } | ActionError::Validation { .. })) => {
                Toast::warning(err.to_string())
            }
            Err(err @ ActionError::Unsupported(_)) => Toast::info(err.to_string()),
            Err(err) => Toast::error(err.to_string()),
        }
    }

    fn style(&self, theme: &Theme) -> Style {
        let fg = match self.level {
            ToastLevel::Info => theme.text,
            ToastLevel::Success => theme.success,
            ToastLevel::Warning => theme.warning,
            ToastLevel::Error => theme.danger,
        };
        Style::new(fg, theme.surface)
    }
}

/// Active toasts with their creation time, newest first.
#[derive(Debug, Default)]
pub struct Toasts {
    active: Vec<(Toast, Instant)>,
    duration: Duration,
}

impl Toasts {
    pub fn new(duration: Duration) -> Self {
        Self {
            active: Vec::new(),
            duration,
        }
    }

    pub fn push(&mut self, toast: Toast) {
        match toast.level {
            ToastLevel::Error => log::warn!("Toast: {}", toast.message),
            _ => log::debug!("Toast: {}", toast.message),
        }
        self.active.insert(0, (toast, Instant::now()));
    }

    /// Drop toasts older than the display duration.
    pub fn expire(&mut self, now: Instant) {
        let duration = self.duration;
        self.active
            .retain(|(_, created)| now.duration_since(*created) < duration);
    }

    pub fn messages(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter().map(|(toast, _)| toast)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Draw toasts stacked in the top-right corner of `area`.
    pub fn render(&self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        if self.is_empty() || area.is_empty() {
            return;
        }
        let width = TOAST_WIDTH.min(area.width);
        let x = area.right() - width;
        for (i, toast) in self.messages().take(MAX_VISIBLE).enumerate() {
            let y = area.y + 1 + (i as u16) * 2;
            if y >= area.bottom() {
                break;
            }
            let style = toast.style(theme);
            let line = Rect::new(x, y, width, 1);
            buf.fill(line, style);
            let text = truncate_to_width(&toast.message, width.saturating_sub(2) as usize);
            let start = x + 1;
            buf.put_str(start, y, &text, style, start + display_width(&text) as u16);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrconsole_lib::{ActionKind, RowId, Success};

    #[test]
    fn test_outcome_levels() {
        let ok: Outcome = Ok(Success::new("Leave approved"));
        assert_eq!(Toast::from_outcome(&ok), Toast::success("Leave approved"));

        let refused: Outcome = Err(ActionError::invalid_transition(
            &ActionKind::Approve,
            "Rejected",
        ));
        assert_eq!(Toast::from_outcome(&refused).level, ToastLevel::Warning);

        let missing: Outcome = Err(ActionError::NotFound(RowId::Int(9)));
        assert_eq!(Toast::from_outcome(&missing).level, ToastLevel::Error);
    }

    #[test]
    fn test_expire_drops_old_toasts() {
        let mut toasts = Toasts::new(Duration::from_secs(4));
        toasts.push(Toast::info("saved"));
        toasts.expire(Instant::now());
        assert!(!toasts.is_empty());
        toasts.expire(Instant::now() + Duration::from_secs(5));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_render_top_right() {
        let theme = Theme::default();
        let mut buf = Buffer::new(60, 6);
        let mut toasts = Toasts::new(Duration::from_secs(4));
        toasts.push(Toast::success("Payslip generated"));
        let area = buf.area();
        toasts.render(&mut buf, area, &theme);
        assert_eq!(buf.line(1).trim(), "Payslip generated");
        assert_eq!(buf.get(17, 1).unwrap().style.fg, theme.success);
        assert_eq!(buf.get(16, 1).unwrap().style.bg, theme.surface);
    }
}
