//! Interactive terminal demo driving one widget.

use std::io::{self, Write};

use crossterm::event::{self, Event as CrosstermEvent};
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, queue, style};
use log::{debug, info};
use pickfield::layout::{NoLayoutHint, list_max_height_with_reserve};
use pickfield::{Color, DropdownField, FieldEvent, Key, KeyCombo, MultiSelect, Palette, Row};

use crate::error::CliError;
use crate::terminal::{TerminalGuard, convert_key_event};

const HELP: &str =
    "type to search | Enter: pick top | Tab: add new | Ctrl+O: toggle list | Ctrl+X: remove last | Ctrl+Q: quit";

/// Lines kept free around the result list.
const ROW_RESERVE: u16 = 5;

/// First screen line of the result list.
const LIST_TOP: u16 = 4;

/// The widget being demonstrated.
pub enum Widget {
    Single(DropdownField),
    Multi(MultiSelect),
}

impl Widget {
    fn appear(&mut self) {
        match self {
            Widget::Single(field) => field.appear(),
            Widget::Multi(multi) => multi.appear(),
        }
    }

    fn dispatch(&mut self, key: KeyCombo) {
        let ctrl = key.modifiers.ctrl;
        match (self, key.key) {
            (Widget::Single(field), Key::Tab) => {
                field.add_new();
            }
            (Widget::Multi(multi), Key::Tab) => {
                multi.add_new();
            }
            (Widget::Single(field), Key::Char('o')) if ctrl => field.toggle_dropdown(),
            (Widget::Multi(multi), Key::Char('o')) if ctrl => multi.tap(),
            (Widget::Multi(multi), Key::Char('x')) if ctrl => {
                if let Some(last) = multi.selections().pop() {
                    multi.remove(&last);
                }
            }
            (Widget::Single(field), _) => {
                field.handle_key(key);
            }
            (Widget::Multi(multi), _) => {
                multi.handle_key(key);
            }
        }
    }

    fn take_events(&mut self) -> Vec<FieldEvent> {
        match self {
            Widget::Single(field) => field.take_events(),
            Widget::Multi(multi) => multi.take_events(),
        }
    }

    fn take_dirty(&mut self) -> bool {
        match self {
            Widget::Single(field) => {
                let dirty = field.is_dirty();
                field.clear_dirty();
                dirty
            }
            Widget::Multi(multi) => {
                let dirty = multi.is_dirty();
                multi.clear_dirty();
                dirty
            }
        }
    }

    /// Final value, printed after the terminal is restored.
    pub fn summary(&self) -> String {
        match self {
            Widget::Single(field) if field.is_confirmed() => format!("selected: {}", field.text()),
            Widget::Single(field) => format!("unconfirmed: {:?}", field.text()),
            Widget::Multi(multi) => format!("selected: {}", multi.selections().join(", ")),
        }
    }
}

/// Run the demo until Ctrl+Q or Ctrl+C.
pub fn run(widget: &mut Widget) -> Result<(), CliError> {
    let mut guard = TerminalGuard::new()?;
    widget.appear();
    widget.take_events();
    draw(guard.stdout(), widget)?;

    loop {
        let key_event = match event::read()? {
            CrosstermEvent::Key(key_event) => key_event,
            CrosstermEvent::Resize(..) => {
                draw(guard.stdout(), widget)?;
                continue;
            }
            _ => continue,
        };
        let Some(key) = convert_key_event(key_event) else {
            continue;
        };

        if key.modifiers.ctrl && matches!(key.key, Key::Char('q') | Key::Char('c')) {
            info!("quit requested");
            break;
        }

        widget.dispatch(key);
        for event in widget.take_events() {
            debug!("field event: {:?}", event);
        }
        if widget.take_dirty() {
            draw(guard.stdout(), widget)?;
        }
    }

    Ok(())
}

fn term_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn draw(out: &mut impl Write, widget: &Widget) -> io::Result<()> {
    let (_, height) = terminal::size()?;

    queue!(
        out,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        Print(HELP),
        cursor::MoveTo(0, 2)
    )?;

    let (palette, border, open, rows) = match widget {
        Widget::Single(field) => {
            let palette = field.config().palette;
            let text = field.text();
            queue!(out, SetForegroundColor(term_color(field.border_color())), Print("[ "))?;
            if text.is_empty() {
                queue!(
                    out,
                    SetForegroundColor(term_color(palette.placeholder)),
                    Print(&field.config().placeholder)
                )?;
            } else {
                queue!(out, SetForegroundColor(term_color(palette.text)), Print(&text))?;
            }
            (palette, field.border_color(), field.is_open(), field.rows())
        }
        Widget::Multi(multi) => {
            let palette = multi.config().palette;
            queue!(out, SetForegroundColor(term_color(multi.border_color())), Print("[ "))?;
            for chip in multi.selections() {
                queue!(
                    out,
                    SetBackgroundColor(term_color(palette.accent)),
                    SetForegroundColor(term_color(Color::WHITE)),
                    Print(format!(" x {chip} ")),
                    ResetColor,
                    Print(" ")
                )?;
            }
            if multi.accepts_input() {
                if multi.query().is_empty() {
                    queue!(
                        out,
                        SetForegroundColor(term_color(palette.placeholder)),
                        Print(&multi.config().placeholder)
                    )?;
                } else {
                    queue!(
                        out,
                        SetForegroundColor(term_color(palette.text)),
                        Print(multi.query())
                    )?;
                }
            }
            (palette, multi.border_color(), multi.is_open(), multi.rows())
        }
    };

    let indicator = if open { " ▲ ]" } else { " ▼ ]" };
    queue!(out, SetForegroundColor(term_color(border)), Print(indicator), ResetColor)?;

    if open {
        let limit = list_max_height_with_reserve(height, &NoLayoutHint, ROW_RESERVE);
        for (i, row) in rows.iter().take(limit as usize).enumerate() {
            queue!(out, cursor::MoveTo(2, LIST_TOP + i as u16))?;
            draw_row(out, row, &palette)?;
        }
    }

    out.flush()
}

fn draw_row(out: &mut impl Write, row: &Row, palette: &Palette) -> io::Result<()> {
    match row {
        Row::Option {
            label,
            highlighted: true,
        } => queue!(
            out,
            SetBackgroundColor(term_color(palette.accent)),
            SetForegroundColor(term_color(Color::WHITE)),
            Print(format!(" {label} ")),
            ResetColor
        ),
        Row::Option { label, .. } => queue!(
            out,
            SetForegroundColor(term_color(palette.text)),
            Print(format!(" {label} ")),
            ResetColor
        ),
        Row::AddNew { label } => queue!(
            out,
            SetForegroundColor(term_color(palette.accent)),
            Print(format!(" + {label} ")),
            ResetColor
        ),
        Row::NoMatch { label } => queue!(
            out,
            SetForegroundColor(term_color(palette.placeholder)),
            Print(format!(" {label} ")),
            ResetColor
        ),
    }
}
