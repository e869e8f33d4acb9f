//! Semantic style builders over a [`Palette`].

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn heading(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

/// Price text
pub fn price(p: &Palette) -> Style {
    accent_bold(p)
}

// --- Status styles ---
pub fn success(p: &Palette) -> Style {
    Style::default().fg(p.success)
}

pub fn danger(p: &Palette) -> Style {
    Style::default().fg(p.danger)
}

// --- Keybinding hint style ---
pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.warning)
}

// --- Badges and buttons ---
pub fn badge(p: &Palette) -> Style {
    Style::default().fg(p.badge_fg).bg(p.badge_bg)
}

pub fn destructive_badge(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent_fg)
        .bg(p.danger)
        .add_modifier(Modifier::BOLD)
}

/// Primary button; `focused` adds emphasis
pub fn button(p: &Palette, focused: bool) -> Style {
    let style = Style::default().fg(p.accent_fg).bg(p.accent);
    if focused {
        style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        style
    }
}

pub fn button_outline(p: &Palette, focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(p.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(p.text_secondary)
    }
}

pub fn button_disabled(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_muted)
        .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
}

/// Selected page number or highlighted card title
pub fn selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.accent_fg)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

pub fn skeleton(p: &Palette) -> Style {
    Style::default().fg(p.skeleton)
}

// --- Block builders ---
pub fn card_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused {
            p.border_active
        } else {
            p.border_dim
        }))
        .style(Style::default().bg(p.card_bg))
}
