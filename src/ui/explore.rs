// ui/explore.rs

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::*,
};

use super::game::card_slots;
use super::strain_card::{CardOptions, render_strain_card};
use crate::{actions::TRAVEL_COST, context::Context};

pub fn render(buffer: &mut Buffer, context: &Context, area: Rect, destination: &mut ListState) {
    let travel_height = context.catalog.locations().len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(travel_height),
        ])
        .split(area);

    render_location(buffer, context, chunks[0]);
    render_local_strains(buffer, context, chunks[1]);
    render_travel_map(buffer, context, chunks[2], destination);
}

fn render_location(buffer: &mut Buffer, context: &Context, area: Rect) {
    let current = context.player.current_location();
    let description = context
        .catalog
        .location(current)
        .map(|location| location.description.as_str())
        .unwrap_or_default();

    Paragraph::new(Span::styled(description, Style::default().fg(Color::Green)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Green))
                .title(Span::styled(
                    format!(" 📍 Current Location: {current} "),
                    Style::default()
                        .fg(Color::LightGreen)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .render(area, buffer);
}

fn render_local_strains(buffer: &mut Buffer, context: &Context, area: Rect) {
    let strains: Vec<_> = context
        .catalog
        .strains_at(context.player.current_location())
        .collect();
    if strains.is_empty() {
        Paragraph::new("No strains grow here.")
            .style(Style::default().fg(Color::DarkGray))
            .render(area, buffer);
        return;
    }

    for (slot, strain) in card_slots(area, strains.len()).into_iter().zip(strains) {
        let options = CardOptions {
            discovered_badge: context.player.has_discovered(&strain.id),
            ..CardOptions::default()
        };
        render_strain_card(buffer, slot, strain, options);
    }
}

fn render_travel_map(
    buffer: &mut Buffer,
    context: &Context,
    area: Rect,
    destination: &mut ListState,
) {
    let current = context.player.current_location();
    let can_travel = context.player.energy() >= TRAVEL_COST;

    let items: Vec<ListItem> = context
        .catalog
        .locations()
        .iter()
        .map(|location| {
            let here = location.name == current;
            let cost = if here {
                Span::styled(" (you are here)", Style::default().fg(Color::LightGreen))
            } else {
                Span::styled(
                    format!(" {TRAVEL_COST} Energy"),
                    Style::default().fg(if can_travel {
                        Color::DarkGray
                    } else {
                        Color::Red
                    }),
                )
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", location.icon)),
                Span::styled(
                    location.name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" - {}", location.description),
                    Style::default().fg(Color::Gray),
                ),
                cost,
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Green))
                .title(" 🗺️ Travel Map "),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol("> ");
    StatefulWidget::render(list, area, buffer, destination);
}
