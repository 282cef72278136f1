//! Color theme and glyphs for the Sevenfold TUI.
//!
//! A deep-indigo night palette by default with an optional high-contrast
//! override. Each law carries its own accent.

use ratatui::style::{Color, Modifier, Style};

use sevenfold_engine::StageId;
use sevenfold_engine::ui::UiOptions;

/// Night-sky palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_DARK: Color = Color::Rgb(15, 12, 36); // indigo-950ish
    pub const BG_PANEL: Color = Color::Rgb(28, 22, 58);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(49, 38, 94);
    pub const BG_BORDER: Color = Color::Rgb(88, 72, 150);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(243, 240, 255);
    pub const TEXT_SECONDARY: Color = Color::Rgb(216, 200, 250); // purple-200
    pub const TEXT_MUTED: Color = Color::Rgb(139, 125, 180);
    pub const TEXT_DISABLED: Color = Color::Rgb(84, 74, 120);

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(168, 85, 247); // purple-500
    pub const GOLD: Color = Color::Rgb(253, 230, 138); // amber-200

    // === Law accents ===
    pub const LAW_POTENTIALITY: Color = Color::Rgb(147, 51, 234); // purple-600
    pub const LAW_GIVING: Color = Color::Rgb(16, 185, 129); // emerald-500
    pub const LAW_KARMA: Color = Color::Rgb(245, 158, 11); // amber-500
    pub const LAW_LEAST_EFFORT: Color = Color::Rgb(96, 165, 250); // blue-400
    pub const LAW_INTENTION: Color = Color::Rgb(217, 70, 239); // fuchsia-500
    pub const LAW_DETACHMENT: Color = Color::Rgb(148, 163, 184); // slate-400
    pub const LAW_DHARMA: Color = Color::Rgb(250, 204, 21); // yellow-400

    pub const SUCCESS: Color = Color::Rgb(134, 239, 172); // green-300
    pub const WARNING: Color = Color::Rgb(253, 186, 116); // orange-300
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub primary: Color,
    pub gold: Color,
    pub success: Color,
    pub warning: Color,
    pub laws: [Color; StageId::COUNT],
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_disabled: colors::TEXT_DISABLED,
            primary: colors::PRIMARY,
            gold: colors::GOLD,
            success: colors::SUCCESS,
            warning: colors::WARNING,
            laws: [
                colors::LAW_POTENTIALITY,
                colors::LAW_GIVING,
                colors::LAW_KARMA,
                colors::LAW_LEAST_EFFORT,
                colors::LAW_INTENTION,
                colors::LAW_DETACHMENT,
                colors::LAW_DHARMA,
            ],
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            text_disabled: Color::DarkGray,
            primary: Color::White,
            gold: Color::Yellow,
            success: Color::Green,
            warning: Color::Yellow,
            laws: [
                Color::Magenta,
                Color::Green,
                Color::Yellow,
                Color::Cyan,
                Color::Magenta,
                Color::White,
                Color::Yellow,
            ],
        }
    }

    #[must_use]
    pub fn law(&self, stage: StageId) -> Color {
        self.laws[stage.index()]
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for map nodes, gauges and decorations.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub locked: &'static str,
    pub completed: &'static str,
    pub path: &'static str,
    pub selected: &'static str,
    pub radio_on: &'static str,
    pub radio_off: &'static str,
    pub gauge_full: &'static str,
    pub gauge_empty: &'static str,
    pub orb: &'static str,
    pub hand: &'static str,
    pub seed: &'static str,
    pub soil: &'static str,
    pub growth: [&'static str; 3],
    pub piece: &'static str,
    pub star: &'static str,
    pub sparkle_frames: &'static [&'static str],
    pub arrow_left: &'static str,
    pub arrow_down: &'static str,
}

const SPARKLE_FRAMES: &[&str] = &["·", "✦", "✧", "✦"];
const SPARKLE_FRAMES_ASCII: &[&str] = &[".", "*", "+", "*"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            locked: "#",
            completed: "v",
            path: "|",
            selected: ">",
            radio_on: "(*)",
            radio_off: "( )",
            gauge_full: "=",
            gauge_empty: "-",
            orb: "O",
            hand: "[ ]",
            seed: "o",
            soil: "_",
            growth: [",", "Y", "*"],
            piece: "#",
            star: "*",
            sparkle_frames: SPARKLE_FRAMES_ASCII,
            arrow_left: "<-",
            arrow_down: "v",
        }
    } else {
        Glyphs {
            locked: "⊘",
            completed: "✓",
            path: "│",
            selected: "▸",
            radio_on: "◉",
            radio_off: "○",
            gauge_full: "█",
            gauge_empty: "░",
            orb: "●",
            hand: "◡",
            seed: "•",
            soil: "▁",
            growth: ["╷", "ψ", "❀"],
            piece: "◆",
            star: "✦",
            sparkle_frames: SPARKLE_FRAMES,
            arrow_left: "←",
            arrow_down: "↓",
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn sparkle_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).sparkle_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[(tick / 12) % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Color, Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn quote(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_secondary)
            .add_modifier(Modifier::ITALIC)
    }

    #[must_use]
    pub fn button(palette: &Palette, accent: Color, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(palette.bg_dark)
                .bg(accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(palette.text_disabled)
                .bg(palette.bg_panel)
        }
    }

    #[must_use]
    pub fn secondary_button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_secondary)
            .bg(palette.bg_highlight)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.gold)
            .add_modifier(Modifier::BOLD)
    }
}
