use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use sevenfold_engine::content::{COMPLETION_MESSAGE, COMPLETION_TITLE, RETURN_HOME_LABEL};
use sevenfold_engine::ui::HitTarget;
use sevenfold_engine::{App, StageId};

use crate::theme::{Glyphs, Palette, styles};
use crate::widgets::{button, column, text_block, wrapped_height};

pub(crate) fn draw(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let col = column(area);
    let message_rows = wrapped_height(COMPLETION_MESSAGE, col.width);
    let needed = 1 + 2 + 1 + 2 + message_rows + 2 + 1;
    let top = col.y + col.height.saturating_sub(needed) / 2;
    let line = |offset: u16, height: u16| Rect {
        y: (top + offset).min(col.bottom()),
        height: height.min(col.bottom().saturating_sub(top + offset)),
        ..col
    };

    // One star per law, each in its own color.
    let ring: Vec<Span> = StageId::all()
        .flat_map(|id| {
            [
                Span::styled(glyphs.star, Style::default().fg(palette.law(id))),
                Span::raw(" "),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(ring)).alignment(Alignment::Center),
        line(0, 1),
    );
    frame.render_widget(
        Paragraph::new(Span::styled(COMPLETION_TITLE, styles::title(palette)))
            .alignment(Alignment::Center),
        line(3, 1),
    );
    text_block(
        frame,
        line(6, message_rows),
        COMPLETION_MESSAGE,
        styles::quote(palette),
    );
    let action = line(6 + message_rows + 2, 1);
    if action.height > 0 {
        button(
            frame,
            app,
            action,
            RETURN_HOME_LABEL,
            styles::button(palette, palette.gold, true),
            HitTarget::Primary,
        );
    }
}
