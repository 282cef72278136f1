//! A stage visit: intro, the law's interaction, and the summary.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
};

use sevenfold_engine::content::{BACK_TO_MAP_LABEL, law, summary_action};
use sevenfold_engine::ui::HitTarget;
use sevenfold_engine::{App, Interaction, StageId, Step};

use crate::laws;
use crate::theme::{Glyphs, Palette, styles};
use crate::widgets::{button, button_pair, column, text_block, wrapped_height};

const HEADER_ROWS: u16 = 4;

pub(crate) fn draw(
    frame: &mut Frame,
    app: &mut App,
    stage: StageId,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let Some((step, interaction)) = app
        .runner()
        .map(|runner| (runner.step(), runner.interaction().clone()))
    else {
        return;
    };
    let accent = palette.law(stage);
    let col = column(area);

    draw_header(frame, stage, col, accent, palette);
    let body = Rect {
        y: col.y + HEADER_ROWS.min(col.height),
        height: col.height.saturating_sub(HEADER_ROWS),
        ..col
    };

    match step {
        Step::Intro => draw_intro(frame, app, stage, body, accent, palette),
        Step::Interaction => {
            draw_interaction(frame, app, stage, &interaction, body, accent, palette, glyphs);
        }
        Step::Summary => draw_summary(frame, app, stage, &interaction, body, accent, palette),
    }
}

fn draw_header(frame: &mut Frame, stage: StageId, col: Rect, accent: Color, palette: &Palette) {
    let content = law(stage);
    let lines = [
        (
            format!("Law {} of {}", stage, StageId::COUNT),
            Style::default().fg(palette.text_muted),
        ),
        (
            content.name.to_string(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        (
            content.subtitle.to_string(),
            Style::default().fg(palette.text_secondary),
        ),
    ];
    for (offset, (text, style)) in (0u16..).zip(lines) {
        if offset >= col.height {
            break;
        }
        frame.render_widget(
            Paragraph::new(Span::styled(text, style)).alignment(Alignment::Center),
            Rect {
                y: col.y + offset,
                height: 1,
                ..col
            },
        );
    }
}

fn draw_intro(
    frame: &mut Frame,
    app: &mut App,
    stage: StageId,
    body: Rect,
    accent: Color,
    palette: &Palette,
) {
    let content = law(stage);
    let quote_rows = wrapped_height(content.intro_quote, body.width);
    let top = body.y + body.height.saturating_sub(quote_rows + 3) / 2;
    let used = text_block(
        frame,
        Rect {
            y: top,
            height: quote_rows.min(body.bottom().saturating_sub(top)),
            ..body
        },
        content.intro_quote,
        styles::quote(palette),
    );
    let action_y = top + used + 2;
    if action_y < body.bottom() {
        button(
            frame,
            app,
            Rect {
                y: action_y,
                height: 1,
                ..body
            },
            content.intro_action,
            styles::button(palette, accent, true),
            HitTarget::Primary,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_interaction(
    frame: &mut Frame,
    app: &mut App,
    stage: StageId,
    interaction: &Interaction,
    body: Rect,
    accent: Color,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let mut y = body.y;
    if let Some(reflection) = law(stage).reflection {
        let rows = wrapped_height(reflection, body.width).min(body.height);
        text_block(
            frame,
            Rect {
                height: rows,
                ..body
            },
            reflection,
            Style::default().fg(palette.text_secondary),
        );
        y += rows + 1;
    }

    // caption + gap + action
    let footer_rows = 3;
    let stage_area = Rect {
        y: y.min(body.bottom()),
        height: body.bottom().saturating_sub(y).saturating_sub(footer_rows),
        ..body
    };
    laws::draw(frame, app, interaction, stage_area, accent, palette, glyphs);

    let caption_y = stage_area.bottom();
    if let Some(caption) = laws::caption(interaction)
        && caption_y < body.bottom()
    {
        frame.render_widget(
            Paragraph::new(Span::styled(caption, Style::default().fg(accent)))
                .alignment(Alignment::Center),
            Rect {
                y: caption_y,
                height: 1,
                ..body
            },
        );
    }
    let action_y = caption_y + 2;
    if let Some((label, enabled)) = laws::action(interaction)
        && action_y < body.bottom()
    {
        button(
            frame,
            app,
            Rect {
                y: action_y,
                height: 1,
                ..body
            },
            label,
            styles::button(palette, accent, enabled),
            HitTarget::Primary,
        );
    }
}

fn draw_summary(
    frame: &mut Frame,
    app: &mut App,
    stage: StageId,
    interaction: &Interaction,
    body: Rect,
    accent: Color,
    palette: &Palette,
) {
    let content = law(stage);
    let purpose = match interaction {
        Interaction::Quiz(quiz) => Some(quiz.purpose()),
        _ => None,
    };
    let purpose_rows = purpose.map_or(0, |text| wrapped_height(text, body.width) + 2);
    let quote_rows = wrapped_height(content.summary_quote, body.width);
    let needed = purpose_rows + quote_rows + 3;
    let mut y = body.y + body.height.saturating_sub(needed) / 2;

    if let Some(text) = purpose {
        let used = text_block(
            frame,
            Rect {
                y,
                height: purpose_rows.saturating_sub(2).min(body.bottom().saturating_sub(y)),
                ..body
            },
            text,
            Style::default()
                .fg(palette.gold)
                .add_modifier(Modifier::BOLD),
        );
        y += used + 2;
    }
    if y < body.bottom() {
        let used = text_block(
            frame,
            Rect {
                y,
                height: quote_rows.min(body.bottom() - y),
                ..body
            },
            content.summary_quote,
            styles::quote(palette),
        );
        y += used + 2;
    }
    if y < body.bottom() {
        button_pair(
            frame,
            app,
            Rect {
                y,
                height: 1,
                ..body
            },
            (summary_action(stage), styles::button(palette, accent, true)),
            (BACK_TO_MAP_LABEL, styles::secondary_button(palette)),
        );
    }
}
