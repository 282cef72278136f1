//! Virtual terminal backend for render tests.
//!
//! Frames are encoded to ANSI the way a real terminal receives them and fed
//! through a `vt100::Parser`, so assertions see what a user would: text,
//! colors and attributes after escape-sequence interpretation.

#![allow(dead_code)]

use std::fmt::{self, Write as _};
use std::io::{self, Write};

use crossterm::Command;
use crossterm::{cursor, style, terminal};
use ratatui::backend::{Backend, ClearType, WindowSize};
use ratatui::buffer::Cell;
use ratatui::layout::{Position, Size};
use ratatui::style::{Color, Modifier, Style};

pub struct VT100Backend {
    parser: vt100::Parser,
    size: Size,
}

impl VT100Backend {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            parser: vt100::Parser::new(height, width, 0),
            size: Size::new(width, height),
        }
    }

    pub fn screen(&self) -> &vt100::Screen {
        self.parser.screen()
    }

    /// The whole screen, rows joined by newlines.
    pub fn contents(&self) -> String {
        self.parser.screen().contents()
    }

    /// One row's text with trailing blanks trimmed.
    pub fn row(&self, row: u16) -> String {
        self.parser
            .screen()
            .rows(0, self.size.width)
            .nth(usize::from(row))
            .map(|text| text.trim_end().to_string())
            .unwrap_or_default()
    }

    /// First row containing `needle`.
    pub fn find_row(&self, needle: &str) -> Option<u16> {
        (0..self.size.height).find(|&row| self.row(row).contains(needle))
    }

    /// Foreground color of the first cell of the first occurrence of `needle`.
    pub fn fg_at(&self, needle: &str) -> Option<vt100::Color> {
        let row = self.find_row(needle)?;
        let text = self.row(row);
        let byte = text.find(needle)?;
        // Columns count cells, not bytes; everything left of the match is
        // single-width in the screens under test.
        let column = text[..byte].chars().count() as u16;
        self.parser
            .screen()
            .cell(row, column)
            .map(vt100::Cell::fgcolor)
    }

    fn feed(&mut self, command: impl Command) {
        let mut ansi = String::new();
        if command.write_ansi(&mut ansi).is_ok() {
            self.parser.process(ansi.as_bytes());
        }
    }
}

impl Write for VT100Backend {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.parser.process(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Display for VT100Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.contents())
    }
}

fn encode_style(out: &mut String, cell_style: Style) {
    let _ = style::SetAttribute(style::Attribute::Reset).write_ansi(out);
    if let Some(fg) = to_crossterm_color(cell_style.fg) {
        let _ = style::SetForegroundColor(fg).write_ansi(out);
    }
    if let Some(bg) = to_crossterm_color(cell_style.bg) {
        let _ = style::SetBackgroundColor(bg).write_ansi(out);
    }
    let modifiers = cell_style.add_modifier;
    for (modifier, attribute) in [
        (Modifier::BOLD, style::Attribute::Bold),
        (Modifier::ITALIC, style::Attribute::Italic),
        (Modifier::DIM, style::Attribute::Dim),
        (Modifier::UNDERLINED, style::Attribute::Underlined),
    ] {
        if modifiers.contains(modifier) {
            let _ = style::SetAttribute(attribute).write_ansi(out);
        }
    }
}

impl Backend for VT100Backend {
    type Error = io::Error;

    fn draw<'a, I>(&mut self, content: I) -> io::Result<()>
    where
        I: Iterator<Item = (u16, u16, &'a Cell)>,
    {
        let mut ansi = String::new();
        let mut cursor_at: Option<(u16, u16)> = None;
        let mut current: Option<Style> = None;

        for (x, y, cell) in content {
            if cursor_at != Some((x, y)) {
                let _ = cursor::MoveTo(x, y).write_ansi(&mut ansi);
            }
            let cell_style = cell.style();
            if current != Some(cell_style) {
                encode_style(&mut ansi, cell_style);
                current = Some(cell_style);
            }
            let _ = write!(ansi, "{}", cell.symbol());
            cursor_at = Some((x + 1, y));
        }

        self.parser.process(ansi.as_bytes());
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn get_cursor_position(&mut self) -> io::Result<Position> {
        let (row, column) = self.parser.screen().cursor_position();
        Ok(Position::new(column, row))
    }

    fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
        let position = position.into();
        self.feed(cursor::MoveTo(position.x, position.y));
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.feed(terminal::Clear(terminal::ClearType::All));
        Ok(())
    }

    fn clear_region(&mut self, _clear_type: ClearType) -> io::Result<()> {
        self.clear()
    }

    fn size(&self) -> io::Result<Size> {
        Ok(self.size)
    }

    fn window_size(&mut self) -> io::Result<WindowSize> {
        Ok(WindowSize {
            columns_rows: self.size,
            pixels: Size::new(self.size.width * 8, self.size.height * 16),
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn to_crossterm_color(color: Option<Color>) -> Option<style::Color> {
    use style::Color as C;

    match color? {
        Color::Reset => None,
        Color::Black => Some(C::Black),
        Color::Red => Some(C::DarkRed),
        Color::Green => Some(C::DarkGreen),
        Color::Yellow => Some(C::DarkYellow),
        Color::Blue => Some(C::DarkBlue),
        Color::Magenta => Some(C::DarkMagenta),
        Color::Cyan => Some(C::DarkCyan),
        Color::Gray => Some(C::Grey),
        Color::DarkGray => Some(C::DarkGrey),
        Color::LightRed => Some(C::Red),
        Color::LightGreen => Some(C::Green),
        Color::LightYellow => Some(C::Yellow),
        Color::LightBlue => Some(C::Blue),
        Color::LightMagenta => Some(C::Magenta),
        Color::LightCyan => Some(C::Cyan),
        Color::White => Some(C::White),
        Color::Rgb(r, g, b) => Some(C::Rgb { r, g, b }),
        Color::Indexed(i) => Some(C::AnsiValue(i)),
    }
}
