//! Small drawing helpers shared by every screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use sevenfold_engine::App;
use sevenfold_engine::ui::{HitTarget, Region};

use crate::theme::{Palette, styles};

pub(crate) const MAX_TEXT_WIDTH: u16 = 64;

pub(crate) fn region(rect: Rect) -> Region {
    Region::new(rect.x, rect.y, rect.width, rect.height)
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// The central text column of `area`.
pub(crate) fn column(area: Rect) -> Rect {
    let width = area.width.min(MAX_TEXT_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Rows a centered, word-wrapped paragraph of `text` needs at `width`.
pub(crate) fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows = 1usize;
    let mut used = 0usize;
    for word in text.split_whitespace() {
        let w = word.width();
        if used == 0 {
            used = w;
        } else if used + 1 + w <= width {
            used += 1 + w;
        } else {
            rows += 1;
            used = w;
        }
        while used > width {
            rows += 1;
            used -= width;
        }
    }
    rows as u16
}

/// Draw centered wrapped text; returns the rows used.
pub(crate) fn text_block(frame: &mut Frame, area: Rect, text: &str, style: Style) -> u16 {
    let height = wrapped_height(text, area.width).min(area.height);
    let rect = Rect { height, ..area };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text.to_string(), style)))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
    height
}

/// A one-line centered button, recorded as a hit target.
pub(crate) fn button(
    frame: &mut Frame,
    app: &mut App,
    row: Rect,
    label: &str,
    style: Style,
    target: HitTarget,
) -> Rect {
    let text = format!("  {label}  ");
    let rect = centered(Rect { height: 1, ..row }, text.width() as u16, 1);
    frame.render_widget(Paragraph::new(Span::styled(text, style)), rect);
    app.hit_regions_mut().push(region(rect), target);
    rect
}

/// Two buttons side by side on one row.
pub(crate) fn button_pair(
    frame: &mut Frame,
    app: &mut App,
    row: Rect,
    primary: (&str, Style),
    secondary: (&str, Style),
) {
    let left = format!("  {}  ", primary.0);
    let right = format!("  {}  ", secondary.0);
    let total = (left.width() + right.width() + 3) as u16;
    let rect = centered(Rect { height: 1, ..row }, total, 1);
    let left_rect = Rect {
        width: (left.width() as u16).min(rect.width),
        ..rect
    };
    let right_x = rect.x + left_rect.width + 3;
    let right_rect = Rect {
        x: right_x.min(rect.right()),
        width: rect.right().saturating_sub(right_x),
        ..rect
    };
    frame.render_widget(Paragraph::new(Span::styled(left, primary.1)), left_rect);
    frame.render_widget(Paragraph::new(Span::styled(right, secondary.1)), right_rect);
    app.hit_regions_mut().push(region(left_rect), HitTarget::Primary);
    app.hit_regions_mut().push(region(right_rect), HitTarget::Secondary);
}

/// Footer line of `key action` pairs.
pub(crate) fn key_hints(palette: &Palette, hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, action)) in hints.iter().enumerate() {
        let lead = if i == 0 { " " } else { "  " };
        spans.push(Span::styled(
            format!("{lead}{key}"),
            styles::key_highlight(palette),
        ));
        spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
    }
    Line::from(spans)
}
