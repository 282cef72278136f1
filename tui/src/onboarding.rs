use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use unicode_width::UnicodeWidthStr;

use sevenfold_engine::App;
use sevenfold_engine::content::{BEGIN_LABEL, OPENING_QUOTE, SUBTITLE, TITLE};
use sevenfold_engine::ui::HitTarget;

use crate::theme::{Glyphs, Palette, sparkle_frame, styles};
use crate::widgets::{button, column, text_block, wrapped_height};

pub(crate) fn draw(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let col = column(area);
    let quote_rows = wrapped_height(OPENING_QUOTE, col.width);
    // sparkle, title, subtitle, gap, quote, gap, button
    let needed = 1 + 1 + 1 + 2 + quote_rows + 2 + 1;
    let mut y = col.y + col.height.saturating_sub(needed) / 2;
    let bottom = col.bottom();
    let row = |height: u16, y: &mut u16| -> Rect {
        let rect = Rect {
            y: (*y).min(bottom),
            height: height.min(bottom.saturating_sub(*y)),
            ..col
        };
        *y = y.saturating_add(height);
        rect
    };

    let sparkle = sparkle_frame(app.tick_count(), app.ui_options());
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(sparkle, Style::default().fg(palette.gold)),
            Span::raw("  "),
            Span::styled(glyphs.star, Style::default().fg(palette.primary)),
            Span::raw("  "),
            Span::styled(sparkle, Style::default().fg(palette.gold)),
        ]))
        .alignment(Alignment::Center),
        row(1, &mut y),
    );
    frame.render_widget(
        Paragraph::new(Span::styled(TITLE, styles::title(palette))).alignment(Alignment::Center),
        row(1, &mut y),
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            SUBTITLE,
            Style::default()
                .fg(palette.text_secondary)
                .add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center),
        row(1, &mut y),
    );
    row(2, &mut y);
    let quote = row(quote_rows, &mut y);
    text_block(frame, quote, OPENING_QUOTE, styles::quote(palette));
    row(2, &mut y);
    let begin = row(1, &mut y);
    if begin.height > 0 {
        button(
            frame,
            app,
            begin,
            BEGIN_LABEL,
            styles::button(palette, palette.primary, true),
            HitTarget::Primary,
        );
    }

    if let Some(notice) = app.notice() {
        let notice_row = Rect {
            y: area.bottom().saturating_sub(1),
            height: 1.min(area.height),
            ..area
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                notice.to_string(),
                Style::default().fg(palette.warning),
            ))
            .alignment(if notice.width() <= usize::from(area.width) {
                Alignment::Center
            } else {
                Alignment::Left
            }),
            notice_row,
        );
    }
}
