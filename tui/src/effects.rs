//! Entrance effects for screen and step changes.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

use sevenfold_engine::ui::{AnimPhase, ScreenTransition, TransitionKind};

/// Shrink the content area while a settle effect runs, so the screen appears
/// to ease into place.
#[must_use]
pub fn entrance_area(effect: &ScreenTransition, area: Rect) -> Rect {
    match (effect.kind(), effect.phase()) {
        (TransitionKind::Settle, AnimPhase::Running { progress }) => {
            let t = ease_out_cubic(progress);
            scale_rect(area, 0.92 + 0.08 * t)
        }
        _ => area,
    }
}

/// Blend every cell in `area` toward `base` by the remaining effect time.
pub fn fade_in(effect: &ScreenTransition, buf: &mut Buffer, area: Rect, base: Color) {
    let AnimPhase::Running { progress } = effect.phase() else {
        return;
    };
    let t = ease_out_cubic(progress);
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let fg = blend(base, cell.fg, t);
                let bg = blend(base, cell.bg, t);
                cell.set_fg(fg).set_bg(bg);
            }
        }
    }
}

fn blend(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r0, g0, b0), Color::Rgb(r1, g1, b1)) => {
            Color::Rgb(lerp(r0, r1, t), lerp(g0, g1, t), lerp(b0, b1, t))
        }
        // Named colors cannot be mixed; swap once the fade is a third through.
        _ if t < 0.33 => from,
        _ => to,
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    let value = f32::from(a) + (f32::from(b) - f32::from(a)) * t.clamp(0.0, 1.0);
    value.round().clamp(0.0, 255.0) as u8
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
