//! TUI rendering and input for Sevenfold using ratatui.

mod completion;
mod effects;
mod input;
mod laws;
mod map;
mod onboarding;
mod stage;
mod theme;
mod widgets;

pub use input::{GestureTracker, InputPump, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, sparkle_frame, styles};

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Paragraph},
};

use sevenfold_engine::{App, Interaction, Screen, Step};

/// Main draw function. Also rebuilds the app's hit regions for this frame.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let full = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg_dark)),
        full,
    );
    app.hit_regions_mut().clear();

    let (body, footer) = split_footer(full);
    let transition = app.transition().cloned();
    let content = transition
        .as_ref()
        .map_or(body, |effect| effects::entrance_area(effect, body));

    match app.screen() {
        Screen::Onboarding => onboarding::draw(frame, app, content, &palette, &glyphs),
        Screen::Map => map::draw(frame, app, content, &palette, &glyphs),
        Screen::Stage(id) => stage::draw(frame, app, id, content, &palette, &glyphs),
        Screen::Completion => completion::draw(frame, app, content, &palette, &glyphs),
    }

    if footer.height > 0 {
        frame.render_widget(
            Paragraph::new(widgets::key_hints(&palette, footer_hints(app))),
            footer,
        );
    }

    if let Some(effect) = transition {
        effects::fade_in(&effect, frame.buffer_mut(), body, palette.bg_dark);
    }
}

fn split_footer(area: Rect) -> (Rect, Rect) {
    if area.height < 2 {
        return (area, Rect { height: 0, ..area });
    }
    let body = Rect {
        height: area.height - 1,
        ..area
    };
    let footer = Rect {
        y: area.bottom() - 1,
        height: 1,
        ..area
    };
    (body, footer)
}

fn footer_hints(app: &App) -> &'static [(&'static str, &'static str)] {
    match app.screen() {
        Screen::Onboarding => &[("Enter", "begin"), ("q", "quit")],
        Screen::Map => &[
            ("j/k", "choose"),
            ("1-7", "jump"),
            ("Enter", "open"),
            ("q", "quit"),
        ],
        Screen::Completion => &[("Enter", "return home"), ("q", "quit")],
        Screen::Stage(_) => {
            let Some(runner) = app.runner() else {
                return &[];
            };
            match (runner.step(), runner.interaction()) {
                (Step::Intro, _) => &[("Enter", "begin"), ("Esc", "map"), ("q", "quit")],
                (Step::Summary, _) => &[("Enter", "continue"), ("Esc", "map"), ("q", "quit")],
                (Step::Interaction, Interaction::Hold(_)) => {
                    &[("Space", "hold"), ("Esc", "map"), ("q", "quit")]
                }
                (Step::Interaction, Interaction::Exchange(_)) => {
                    &[("Left", "swipe"), ("Enter", "continue"), ("Esc", "map")]
                }
                (Step::Interaction, Interaction::Planting(_)) => {
                    &[("Down", "plant"), ("Enter", "continue"), ("Esc", "map")]
                }
                (Step::Interaction, Interaction::Assembly(_)) => {
                    &[("p", "push"), ("Enter", "continue"), ("Esc", "map")]
                }
                (Step::Interaction, Interaction::Intention(_)) => {
                    &[("type", "intention"), ("Enter", "release"), ("Esc", "map")]
                }
                (Step::Interaction, Interaction::Detachment(_)) => {
                    &[("1-3", "release"), ("Enter", "continue"), ("Esc", "map")]
                }
                (Step::Interaction, Interaction::Quiz(_)) => {
                    &[("1-4", "choose"), ("Enter", "next"), ("Esc", "map")]
                }
            }
        }
    }
}
