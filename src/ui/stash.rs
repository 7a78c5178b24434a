// ui/stash.rs

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::*,
};

use super::utils::{center_rect, rarity_color, strain_type_color};
use crate::context::Context;

pub fn render(buffer: &mut Buffer, context: &Context, area: Rect, state: &mut TableState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let inventory = context.player.inventory();
    Paragraph::new("")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Green))
                .title(Span::styled(
                    format!(" 🎒 Your Stash ({} strains) ", inventory.len()),
                    Style::default()
                        .fg(Color::LightGreen)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .render(chunks[0], buffer);

    if inventory.is_empty() {
        let empty_area = center_rect(chunks[1], Constraint::Percentage(60), Constraint::Length(4));
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Your stash is empty!",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "Go explore and find some strains!",
                Style::default().fg(Color::Green),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(empty_area, buffer);
        return;
    }

    // Duplicates get their own row.
    let rows: Vec<Row> = inventory
        .iter()
        .filter_map(|id| context.catalog.strain(id))
        .map(|strain| {
            Row::new(vec![
                Cell::from(strain.name.as_str()).style(Style::default().fg(Color::LightGreen)),
                Cell::from(strain.rarity.to_string())
                    .style(Style::default().fg(rarity_color(strain.rarity))),
                Cell::from(strain.strain_type.to_string().to_uppercase())
                    .style(Style::default().fg(strain_type_color(strain.strain_type))),
                Cell::from(format!("{}%", strain.potency)),
                Cell::from(strain.effects.join(", ")).style(Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let header = Row::new(vec!["Name", "Rarity", "Type", "THC", "Effects"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    let widths = [
        Constraint::Length(18),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(5),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Green)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .column_spacing(1);
    StatefulWidget::render(table, chunks[1], buffer, state);
}
