//! Screen layout of the form, independent of the terminal.

use signup_core::{FieldId, MessageKind};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

const TITLE: &str = "Create your account";
const HINT: &str = "Tab/↑↓ move · Enter submit · Ctrl+R reset · Esc quit";
pub const LEFT_PAD: u16 = 1;
const FOCUS_MARKER: &str = "› ";
const BLUR_MARKER: &str = "  ";

/// How a line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Label,
    Input { focused: bool, invalid: bool },
    Error,
    Message(MessageKind),
    Hint,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn blank() -> Self {
        Self::new("", LineStyle::Blank)
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub lines: Vec<Line>,
    /// Column and row of the text cursor.
    pub cursor: (u16, u16),
}

/// Lay out the form: a label, an input and an error region per field, then
/// the form-level message region.
pub fn layout(app: &App) -> Screen {
    let view = app.view();
    let mut lines = vec![Line::new(TITLE, LineStyle::Title), Line::blank()];
    let mut cursor = (LEFT_PAD, 0);

    for field in FieldId::ALL {
        let focused = app.focus() == field;
        let input = app.input(field);
        let display = input.display(field.is_secret());
        let marker = if focused { FOCUS_MARKER } else { BLUR_MARKER };

        lines.push(Line::new(field.label(), LineStyle::Label));

        if focused {
            let before: String = display.chars().take(input.cursor()).collect();
            let col = LEFT_PAD as usize + marker.width() + 1 + before.width();
            cursor = (col as u16, lines.len() as u16);
        }
        lines.push(Line::new(
            format!("{marker}[{display}]"),
            LineStyle::Input {
                focused,
                invalid: view.is_invalid(field),
            },
        ));

        lines.push(Line::new(view.error(field), LineStyle::Error));
    }

    match view.message() {
        Some(message) => lines.push(Line::new(&message.text, LineStyle::Message(message.kind))),
        None => lines.push(Line::blank()),
    }
    lines.push(Line::blank());
    lines.push(Line::new(HINT, LineStyle::Hint));

    Screen { lines, cursor }
}
