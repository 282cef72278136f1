//! The seven-node path. Nodes past the unlock boundary are drawn locked and
//! ignore selection.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use sevenfold_engine::content::{MAP_SUBTITLE, MAP_TITLE, law};
use sevenfold_engine::ui::HitTarget;
use sevenfold_engine::{App, StageId, StageStatus};

use crate::theme::{Glyphs, Palette, styles};
use crate::widgets::{column, region};

const HEADER_ROWS: u16 = 3;

pub(crate) fn draw(frame: &mut Frame, app: &mut App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let col = column(area);
    let nodes = StageId::COUNT as u16;
    let with_paths = nodes * 2 - 1;
    let spaced = col.height >= HEADER_ROWS + with_paths;
    let body_rows = if spaced { with_paths } else { nodes };
    let top = col.y + col.height.saturating_sub(HEADER_ROWS + body_rows) / 2;

    let header = Rect {
        y: top,
        height: 1.min(col.height),
        ..col
    };
    frame.render_widget(
        Paragraph::new(Span::styled(MAP_TITLE, styles::title(palette))).alignment(Alignment::Center),
        header,
    );
    if col.height > 1 {
        frame.render_widget(
            Paragraph::new(Span::styled(
                MAP_SUBTITLE,
                Style::default().fg(palette.text_muted),
            ))
            .alignment(Alignment::Center),
            Rect {
                y: top + 1,
                height: 1,
                ..col
            },
        );
    }

    let journey = *app.journey();
    let cursor = app.map_cursor();
    let mut y = top + HEADER_ROWS;
    for id in StageId::all() {
        if y >= col.bottom() {
            break;
        }
        let row = Rect {
            y,
            height: 1,
            ..col
        };
        let status = journey.status(id);
        frame.render_widget(
            Paragraph::new(node_line(id, status, id == cursor, palette, glyphs)),
            row,
        );
        app.hit_regions_mut()
            .push(region(row), HitTarget::StageNode(id));
        y += 1;

        if spaced && !id.is_last() && y < col.bottom() {
            let lit = status != StageStatus::Locked;
            let color = if lit {
                palette.primary
            } else {
                palette.text_disabled
            };
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::raw("     "),
                    Span::styled(glyphs.path, Style::default().fg(color)),
                ])),
                Rect {
                    y,
                    height: 1,
                    ..col
                },
            );
            y += 1;
        }
    }
}

fn node_line(
    id: StageId,
    status: StageStatus,
    selected: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Line<'static> {
    let content = law(id);
    let pointer = if selected { glyphs.selected } else { " " };
    let (marker, marker_style, name_style) = match status {
        StageStatus::Completed => (
            glyphs.completed.to_string(),
            Style::default().fg(palette.success),
            Style::default().fg(palette.text_secondary),
        ),
        StageStatus::Current => (
            id.to_string(),
            Style::default()
                .fg(palette.bg_dark)
                .bg(palette.law(id))
                .add_modifier(Modifier::BOLD),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        StageStatus::Locked => (
            glyphs.locked.to_string(),
            Style::default().fg(palette.text_disabled),
            Style::default().fg(palette.text_disabled),
        ),
    };
    let mut name_style = name_style;
    if selected {
        name_style = name_style.bg(palette.bg_highlight);
    }

    Line::from(vec![
        Span::styled(format!(" {pointer} "), styles::key_highlight(palette)),
        Span::styled(format!("({marker})"), marker_style),
        Span::raw("  "),
        Span::styled(content.name.to_string(), name_style),
        Span::raw("  "),
        Span::styled(
            content.subtitle.to_string(),
            Style::default().fg(palette.text_muted),
        ),
    ])
}
