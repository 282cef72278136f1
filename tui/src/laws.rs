//! Drawing for each law's interaction, plus the caption and action that go
//! under it. Every live element registers its hit region so the pointer
//! input can find it.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use sevenfold_engine::content::{
    ASSEMBLED, BLOOMED, CONTINUE_LABEL, GROWING, HOLD_PROMPT, INTENTION_PLACEHOLDER,
    NEXT_QUESTION_LABEL, PLANT_PROMPT, PUSH_LABEL, RELEASE_LABEL, RELEASED_INTENTION,
    REVEAL_PURPOSE_LABEL, exchange_caption, release_caption,
};
use sevenfold_engine::interaction::{
    Assembly, BallPosition, Detachment, EXCHANGES_REQUIRED, Exchange, Hold, Intention,
    MAX_INTENTION_CHARS, PIECE_COUNT, Planting, QUESTIONS, Quiz,
};
use sevenfold_engine::ui::HitTarget;
use sevenfold_engine::{App, Interaction, ReleaseItem};

use crate::theme::{Glyphs, Palette};
use crate::widgets::{centered, region};

/// Shared drawing context for one interaction body.
struct Canvas<'a> {
    area: Rect,
    accent: Color,
    palette: &'a Palette,
    glyphs: &'a Glyphs,
    ascii: bool,
}

impl Canvas<'_> {
    /// A rounded panel, or a plain filled one when only ASCII is allowed.
    fn panel(&self, border: Color) -> Block<'static> {
        let block = Block::default().style(Style::default().bg(self.palette.bg_panel));
        if self.ascii {
            block
        } else {
            block
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
        }
    }
}

/// Render `text` starting at `(x, y)`, clipped to `area`.
fn put(frame: &mut Frame, area: Rect, x: u16, y: u16, text: &str, style: Style) {
    if y < area.y || y >= area.bottom() || x < area.x || x >= area.right() {
        return;
    }
    let width = (text.width() as u16).min(area.right() - x);
    frame.render_widget(
        Paragraph::new(Span::styled(text.to_string(), style)),
        Rect::new(x, y, width, 1),
    );
}

fn centered_line(frame: &mut Frame, area: Rect, y: u16, line: Line<'static>) {
    if y < area.y || y >= area.bottom() {
        return;
    }
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        Rect {
            y,
            height: 1,
            ..area
        },
    );
}

pub(crate) fn draw(
    frame: &mut Frame,
    app: &mut App,
    interaction: &Interaction,
    area: Rect,
    accent: Color,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let canvas = Canvas {
        area,
        accent,
        palette,
        glyphs,
        ascii: app.ui_options().ascii_only,
    };
    match interaction {
        Interaction::Hold(hold) => draw_hold(frame, app, &canvas, hold),
        Interaction::Exchange(exchange) => draw_exchange(frame, app, &canvas, exchange),
        Interaction::Planting(planting) => draw_planting(frame, app, &canvas, planting),
        Interaction::Assembly(assembly) => draw_assembly(frame, app, &canvas, assembly),
        Interaction::Intention(intention) => {
            draw_intention(frame, &canvas, intention, app.captures_text());
        }
        Interaction::Detachment(detachment) => draw_detachment(frame, app, &canvas, detachment),
        Interaction::Quiz(quiz) => draw_quiz(frame, app, &canvas, quiz),
    }
}

/// Status line under the interaction.
pub(crate) fn caption(interaction: &Interaction) -> Option<String> {
    match interaction {
        Interaction::Hold(_) | Interaction::Intention(_) | Interaction::Quiz(_) => None,
        Interaction::Exchange(exchange) => {
            Some(exchange_caption(exchange.exchanges(), EXCHANGES_REQUIRED))
        }
        Interaction::Planting(planting) => Some(
            if planting.is_complete() {
                BLOOMED
            } else if planting.is_planted() {
                GROWING
            } else {
                PLANT_PROMPT
            }
            .to_string(),
        ),
        Interaction::Assembly(assembly) => assembly.is_complete().then(|| ASSEMBLED.to_string()),
        Interaction::Detachment(detachment) => Some(release_caption(
            detachment.released_count(),
            ReleaseItem::ALL.len(),
        )),
    }
}

/// Label of the interaction's button and whether it is live. Hold has none.
pub(crate) fn action(interaction: &Interaction) -> Option<(&'static str, bool)> {
    match interaction {
        Interaction::Hold(_) => None,
        Interaction::Assembly(assembly) if !assembly.is_assembling() => Some((PUSH_LABEL, true)),
        Interaction::Intention(intention) if !intention.is_released() => {
            Some((RELEASE_LABEL, intention.can_release()))
        }
        Interaction::Quiz(quiz) => {
            let label = if quiz.is_last_question() {
                REVEAL_PURPOSE_LABEL
            } else {
                NEXT_QUESTION_LABEL
            };
            Some((label, quiz.can_advance()))
        }
        other => Some((CONTINUE_LABEL, other.is_complete())),
    }
}

fn draw_hold(frame: &mut Frame, app: &mut App, canvas: &Canvas<'_>, hold: &Hold) {
    const BOX_WIDTH: u16 = 22;
    const BOX_HEIGHT: u16 = 5;
    const GAUGE_WIDTH: u16 = 30;

    let area = canvas.area;
    let rows = BOX_HEIGHT + 2;
    let top = area.y + area.height.saturating_sub(rows) / 2;
    let target = centered(
        Rect {
            y: top,
            height: BOX_HEIGHT.min(area.bottom() - top),
            ..area
        },
        BOX_WIDTH,
        BOX_HEIGHT,
    );

    let border = if hold.is_holding() {
        canvas.accent
    } else {
        canvas.palette.bg_border
    };
    let block = canvas.panel(border);
    let inner = block.inner(target);
    frame.render_widget(block, target);

    let label = if hold.is_holding() || hold.is_complete() {
        format!("{}%", hold.progress())
    } else {
        HOLD_PROMPT.to_string()
    };
    centered_line(
        frame,
        inner,
        inner.y + inner.height / 2,
        Line::from(Span::styled(
            label,
            Style::default()
                .fg(canvas.accent)
                .add_modifier(Modifier::BOLD),
        )),
    );
    app.hit_regions_mut().push(region(target), HitTarget::Focus);

    let gauge_width = GAUGE_WIDTH.min(area.width);
    let filled = usize::from(gauge_width) * usize::from(hold.progress()) / 100;
    let empty = usize::from(gauge_width) - filled;
    centered_line(
        frame,
        area,
        target.bottom() + 1,
        Line::from(vec![
            Span::styled(
                canvas.glyphs.gauge_full.repeat(filled),
                Style::default().fg(canvas.accent),
            ),
            Span::styled(
                canvas.glyphs.gauge_empty.repeat(empty),
                Style::default().fg(canvas.palette.text_disabled),
            ),
        ]),
    );
}

fn draw_exchange(frame: &mut Frame, app: &mut App, canvas: &Canvas<'_>, exchange: &Exchange) {
    const TRACK_WIDTH: u16 = 40;

    let area = canvas.area;
    let track = centered(area, TRACK_WIDTH, 3);
    let row = track.y + 1;
    let hand = canvas.glyphs.hand;
    let hand_width = hand.width() as u16;
    let muted = Style::default().fg(canvas.palette.text_muted);

    put(frame, area, track.x, row, hand, muted);
    put(
        frame,
        area,
        track.right().saturating_sub(hand_width),
        row,
        hand,
        muted,
    );
    put(frame, area, track.x, row + 1, "give", muted);
    put(
        frame,
        area,
        track.right().saturating_sub(7),
        row + 1,
        "receive",
        muted,
    );

    let orb_x = match exchange.ball() {
        BallPosition::Center => track.x + track.width / 2,
        BallPosition::Given => track.x + hand_width + 1,
        BallPosition::Received => track.right().saturating_sub(hand_width + 2),
    };
    let orb_style = Style::default()
        .fg(canvas.accent)
        .add_modifier(Modifier::BOLD);
    put(frame, area, orb_x, row, canvas.glyphs.orb, orb_style);
    if exchange.ball() == BallPosition::Center && !exchange.is_complete() {
        let arrow = canvas.glyphs.arrow_left;
        put(
            frame,
            area,
            orb_x.saturating_sub(arrow.width() as u16 + 2),
            row,
            arrow,
            muted,
        );
    }

    app.hit_regions_mut().push(region(track), HitTarget::Focus);
}

fn draw_planting(frame: &mut Frame, app: &mut App, canvas: &Canvas<'_>, planting: &Planting) {
    const SOIL_WIDTH: u16 = 24;
    // seed, gap, arrow, gap, soil
    const ROWS: u16 = 5;

    let area = canvas.area;
    let top = area.y + area.height.saturating_sub(ROWS) / 2;
    let soil_y = top + ROWS - 1;
    let mid = area.x + area.width / 2;
    let glyphs = canvas.glyphs;

    let soil_width = SOIL_WIDTH.min(area.width);
    put(
        frame,
        area,
        mid.saturating_sub(soil_width / 2),
        soil_y,
        &glyphs.soil.repeat(usize::from(soil_width)),
        Style::default().fg(canvas.palette.warning),
    );

    if planting.is_planted() {
        let stem = Style::default().fg(canvas.palette.success);
        for (height, glyph) in (1u16..).zip(glyphs.growth.iter()).take(usize::from(planting.growth())) {
            let style = if height == 3 {
                Style::default()
                    .fg(canvas.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                stem
            };
            put(frame, area, mid, soil_y.saturating_sub(height), glyph, style);
        }
        return;
    }

    put(
        frame,
        area,
        mid,
        top,
        glyphs.seed,
        Style::default()
            .fg(canvas.accent)
            .add_modifier(Modifier::BOLD),
    );
    put(
        frame,
        area,
        mid,
        top + 2,
        glyphs.arrow_down,
        Style::default().fg(canvas.palette.text_muted),
    );
    let handle = Rect::new(mid.saturating_sub(3), top.saturating_sub(1), 7, 3).intersection(area);
    app.hit_regions_mut().push(region(handle), HitTarget::Focus);
}

fn draw_assembly(frame: &mut Frame, app: &mut App, canvas: &Canvas<'_>, assembly: &Assembly) {
    const BOX_WIDTH: u16 = 21;
    const BOX_HEIGHT: u16 = 7;

    let area = canvas.area;
    let board = centered(area, BOX_WIDTH, BOX_HEIGHT);
    let (cx, cy) = (board.x + board.width / 2, board.y + board.height / 2);
    let right = board.right().saturating_sub(2);
    let bottom = board.bottom().saturating_sub(1);
    let scattered = [
        (board.x + 1, board.y),
        (right, board.y),
        (board.x + 1, bottom),
        (right, bottom),
    ];
    let gathered = [
        (cx.saturating_sub(1), cy.saturating_sub(1)),
        (cx + 1, cy.saturating_sub(1)),
        (cx.saturating_sub(1), cy),
        (cx + 1, cy),
    ];

    let color = if assembly.is_complete() {
        canvas.palette.gold
    } else {
        canvas.accent
    };
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    for piece in 0..PIECE_COUNT {
        let index = usize::from(piece);
        let (x, y) = if piece < assembly.settled() {
            gathered[index]
        } else {
            scattered[index]
        };
        put(frame, area, x, y, canvas.glyphs.piece, style);
    }

    if !assembly.is_assembling() {
        app.hit_regions_mut().push(region(board), HitTarget::Focus);
    }
}

fn draw_intention(frame: &mut Frame, canvas: &Canvas<'_>, intention: &Intention, editing: bool) {
    let area = canvas.area;

    if intention.is_released() {
        let message_rows = 3;
        let top = area.y + area.height.saturating_sub(message_rows) / 2;
        centered_line(
            frame,
            area,
            top,
            Line::from(Span::styled(
                RELEASED_INTENTION,
                Style::default().fg(canvas.palette.gold),
            )),
        );
        let text_area = Rect {
            y: (top + 2).min(area.bottom()),
            height: area.bottom().saturating_sub(top + 2),
            ..area
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("\"{}\"", intention.text()),
                Style::default()
                    .fg(canvas.accent)
                    .add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
            text_area,
        );
        return;
    }

    let border = if editing {
        canvas.accent
    } else {
        canvas.palette.bg_border
    };
    let block = canvas.panel(border);
    let inner_width = if canvas.ascii {
        area.width
    } else {
        area.width.saturating_sub(2)
    };
    let text_rows = crate::widgets::wrapped_height(intention.text(), inner_width).clamp(1, 4);
    let frame_rows = if canvas.ascii { 0 } else { 2 };
    let box_rect = Rect {
        y: area.y + area.height.saturating_sub(text_rows + frame_rows + 1) / 2,
        height: (text_rows + frame_rows).min(area.height),
        ..area
    };
    let inner = block.inner(box_rect);
    frame.render_widget(block, box_rect);

    let line = if intention.text().is_empty() {
        Line::from(Span::styled(
            INTENTION_PLACEHOLDER,
            Style::default().fg(canvas.palette.text_muted),
        ))
    } else {
        let mut spans = vec![Span::styled(
            intention.text().to_string(),
            Style::default().fg(canvas.palette.text_primary),
        )];
        if editing {
            let cursor = if canvas.ascii { "_" } else { "▏" };
            spans.push(Span::styled(cursor, Style::default().fg(canvas.accent)));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: false }), inner);

    let count = format!(
        "{}/{}",
        intention.text().chars().count(),
        MAX_INTENTION_CHARS
    );
    let count_y = box_rect.bottom();
    if count_y < area.bottom() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                count,
                Style::default().fg(canvas.palette.text_muted),
            ))
            .alignment(Alignment::Right),
            Rect {
                y: count_y,
                height: 1,
                ..area
            },
        );
    }
}

fn draw_detachment(
    frame: &mut Frame,
    app: &mut App,
    canvas: &Canvas<'_>,
    detachment: &Detachment,
) {
    const CARD_WIDTH: u16 = 14;
    const CARD_HEIGHT: u16 = 3;
    const GAP: u16 = 3;

    let area = canvas.area;
    let count = ReleaseItem::ALL.len() as u16;
    let card_width = CARD_WIDTH.min(area.width.saturating_sub(GAP * (count - 1)) / count);
    let row = centered(area, card_width * count + GAP * (count - 1), CARD_HEIGHT);

    for (slot, item) in (0u16..).zip(ReleaseItem::ALL) {
        let card = Rect {
            x: row.x + slot * (card_width + GAP),
            width: card_width,
            ..row
        };
        if detachment.is_released(item) {
            put(
                frame,
                area,
                card.x + card.width / 2,
                card.y + card.height / 2,
                canvas.glyphs.star,
                Style::default().fg(canvas.palette.text_disabled),
            );
            continue;
        }
        let block = canvas.panel(canvas.accent);
        let inner = block.inner(card);
        frame.render_widget(block, card);
        centered_line(
            frame,
            inner,
            inner.y + inner.height / 2,
            Line::from(Span::styled(
                item.label(),
                Style::default().fg(canvas.palette.text_primary),
            )),
        );
        app.hit_regions_mut().push(region(card), HitTarget::Item(item));
    }
}

fn draw_quiz(frame: &mut Frame, app: &mut App, canvas: &Canvas<'_>, quiz: &Quiz) {
    let Some(question) = quiz.current() else {
        return;
    };
    let area = canvas.area;
    let options = question.options.len() as u16;
    // counter, prompt, gap, options
    let rows = 3 + options;
    let top = area.y + area.height.saturating_sub(rows) / 2;

    centered_line(
        frame,
        area,
        top,
        Line::from(Span::styled(
            format!(
                "Question {} of {}",
                quiz.question_index() + 1,
                QUESTIONS.len()
            ),
            Style::default().fg(canvas.palette.text_muted),
        )),
    );
    centered_line(
        frame,
        area,
        top + 1,
        Line::from(Span::styled(
            question.prompt,
            Style::default()
                .fg(canvas.palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
    );

    let label_width = question
        .options
        .iter()
        .map(|option| option.label.width())
        .max()
        .unwrap_or(0) as u16;
    let radio_width = canvas.glyphs.radio_on.width() as u16;
    let width = (label_width + radio_width + 5).min(area.width);
    let x = area.x + (area.width - width) / 2;

    for (offset, (index, option)) in (0u16..).zip(question.options.iter().enumerate()) {
        let y = top + 3 + offset;
        if y >= area.bottom() {
            break;
        }
        let selected = quiz.selected() == Some(index);
        let (radio, style) = if selected {
            (
                canvas.glyphs.radio_on,
                Style::default()
                    .fg(canvas.accent)
                    .bg(canvas.palette.bg_highlight)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                canvas.glyphs.radio_off,
                Style::default().fg(canvas.palette.text_secondary),
            )
        };
        let rect = Rect::new(x, y, width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!(" {} ", index + 1), Style::default().fg(canvas.palette.text_muted)),
                Span::styled(format!("{radio} {}", option.label), style),
            ])),
            rect,
        );
        app.hit_regions_mut().push(region(rect), HitTarget::Choice(index));
    }
}
