// ui/dex.rs

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::*,
};

use super::game::card_slots;
use super::strain_card::{CardOptions, render_hidden_card, render_strain_card};
use crate::context::Context;

pub fn render(buffer: &mut Buffer, context: &Context, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let (discovered, total) = context.catalog.completion(context.player);
    let ratio = if total == 0 {
        0.0
    } else {
        discovered as f64 / total as f64
    };
    Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Green))
                .title(Span::styled(
                    format!(" 📚 Strain Dex ({discovered}/{total}) "),
                    Style::default()
                        .fg(Color::LightGreen)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .ratio(ratio)
        .render(chunks[0], buffer);

    let strains = context.catalog.strains();
    for (slot, strain) in card_slots(chunks[1], strains.len()).into_iter().zip(strains) {
        if context.player.has_discovered(&strain.id) {
            let options = CardOptions {
                show_potency: true,
                show_location: true,
                ..CardOptions::default()
            };
            render_strain_card(buffer, slot, strain, options);
        } else {
            render_hidden_card(buffer, slot);
        }
    }
}
