//! Terminal setup, teardown and drawing.

use std::io::{self, Stdout, Write};
use std::panic;

use crossterm::{
    cursor, queue,
    event::{self, Event as CrosstermEvent},
    execute,
    style::{Attribute, Color as CtColor, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use signup_core::MessageKind;

use crate::render::{LEFT_PAD, LineStyle, Screen};

const PRIMARY: CtColor = CtColor::Rgb { r: 122, g: 162, b: 247 };
const MUTED: CtColor = CtColor::Rgb { r: 128, g: 128, b: 140 };
const DANGER: CtColor = CtColor::Rgb { r: 237, g: 98, b: 94 };
const SUCCESS: CtColor = CtColor::Rgb { r: 98, g: 196, b: 120 };

/// Raw-mode alternate screen, restored on drop.
pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        Ok(Self { stdout })
    }

    /// Block until the next terminal event.
    pub fn read(&self) -> io::Result<CrosstermEvent> {
        event::read()
    }

    pub fn draw(&mut self, screen: &Screen) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All))?;

        for (row, line) in screen.lines.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(LEFT_PAD, row as u16))?;
            apply_style(&mut self.stdout, line.style)?;
            queue!(
                self.stdout,
                Print(&line.text),
                SetAttribute(Attribute::Reset),
                ResetColor
            )?;
        }

        let (col, row) = screen.cursor;
        queue!(self.stdout, cursor::MoveTo(col, row), cursor::Show)?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn apply_style(out: &mut Stdout, style: LineStyle) -> io::Result<()> {
    match style {
        LineStyle::Title => queue!(out, SetForegroundColor(PRIMARY), SetAttribute(Attribute::Bold)),
        LineStyle::Label => queue!(out, SetAttribute(Attribute::Bold)),
        LineStyle::Input { invalid: true, .. } | LineStyle::Error => {
            queue!(out, SetForegroundColor(DANGER))
        }
        LineStyle::Input { focused: true, .. } => queue!(out, SetForegroundColor(PRIMARY)),
        LineStyle::Input { .. } | LineStyle::Blank => Ok(()),
        LineStyle::Message(MessageKind::Danger) => {
            queue!(out, SetForegroundColor(DANGER), SetAttribute(Attribute::Bold))
        }
        LineStyle::Message(MessageKind::Success) => {
            queue!(out, SetForegroundColor(SUCCESS), SetAttribute(Attribute::Bold))
        }
        LineStyle::Hint => queue!(out, SetForegroundColor(MUTED), SetAttribute(Attribute::Dim)),
    }
}

/// Restore the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}
