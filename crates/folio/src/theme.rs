//! Midnight palette, accent mapping, icon glyphs, and semantic styles.

use folio_core::content::{Accent, Icon};
use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const BACKGROUND: Color = Color::Rgb(9, 9, 17); // #090911
pub const SURFACE: Color = Color::Rgb(22, 22, 34); // #161622
pub const FOREGROUND: Color = Color::Rgb(236, 236, 244); // #ececf4
pub const MUTED: Color = Color::Rgb(148, 150, 170); // #9496aa
pub const BORDER: Color = Color::Rgb(58, 60, 82); // #3a3c52
pub const PRIMARY: Color = Color::Rgb(96, 165, 250); // #60a5fa

// ── Accents ───────────────────────────────────────────────────────────

pub const BLUE: Color = Color::Rgb(59, 130, 246); // #3b82f6
pub const CYAN: Color = Color::Rgb(34, 211, 238); // #22d3ee
pub const TEAL: Color = Color::Rgb(45, 212, 191); // #2dd4bf
pub const PURPLE: Color = Color::Rgb(192, 132, 252); // #c084fc
pub const PINK: Color = Color::Rgb(244, 114, 182); // #f472b6
pub const EMERALD: Color = Color::Rgb(52, 211, 153); // #34d399
pub const GREEN: Color = Color::Rgb(74, 222, 128); // #4ade80
pub const AMBER: Color = Color::Rgb(251, 191, 36); // #fbbf24
pub const ORANGE: Color = Color::Rgb(251, 146, 60); // #fb923c
pub const RED: Color = Color::Rgb(248, 113, 113); // #f87171

pub fn accent(accent: Accent) -> Color {
    match accent {
        Accent::Primary => PRIMARY,
        Accent::Blue => BLUE,
        Accent::Cyan => CYAN,
        Accent::Teal => TEAL,
        Accent::Purple => PURPLE,
        Accent::Pink => PINK,
        Accent::Emerald => EMERALD,
        Accent::Green => GREEN,
        Accent::Amber => AMBER,
        Accent::Orange => ORANGE,
    }
}

/// Single-cell glyph for an icon.
pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Server => "▤",
        Icon::Layout => "▦",
        Icon::Cloud => "☁",
        Icon::Database => "⛁",
        Icon::Shield => "⛨",
        Icon::Zap => "ϟ",
        Icon::Smartphone => "▯",
        Icon::Map => "⌖",
        Icon::Calendar => "▣",
        Icon::Mail => "✉",
        Icon::MapPin => "⚲",
        Icon::Linkedin => "in",
        Icon::Github => "gh",
        Icon::Code => "</>",
        Icon::ExternalLink => "↗",
        Icon::Send => "➤",
    }
}

// ── Semantic Styles ───────────────────────────────────────────────────

/// Body copy.
pub fn text() -> Style {
    Style::default().fg(FOREGROUND)
}

/// Secondary copy and captions.
pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

/// Section eyebrow pill.
pub fn eyebrow() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Headline text.
pub fn heading() -> Style {
    Style::default()
        .fg(FOREGROUND)
        .add_modifier(Modifier::BOLD)
}

/// The gradient half of a headline.
pub fn highlight() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Card and panel borders.
pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Border of the focused input.
pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY)
}

/// Filled call-to-action button.
pub fn button_primary() -> Style {
    Style::default()
        .fg(BACKGROUND)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Outlined secondary button.
pub fn button_secondary() -> Style {
    Style::default().fg(FOREGROUND)
}

/// Outbound link text.
pub fn link() -> Style {
    Style::default()
        .fg(PRIMARY)
        .add_modifier(Modifier::UNDERLINED)
}

pub fn error() -> Style {
    Style::default().fg(RED)
}

pub fn success() -> Style {
    Style::default().fg(GREEN).add_modifier(Modifier::BOLD)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(MUTED)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}
