// ui/strain_card.rs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::utils::{rarity_color, strain_type_color};
use crate::catalog::StrainRecord;

pub const CARD_HEIGHT: u16 = 7;

#[derive(Debug, Clone, Copy, Default)]
pub struct CardOptions {
    pub show_potency: bool,
    pub show_location: bool,
    pub discovered_badge: bool,
}

pub fn render_strain_card(
    buffer: &mut Buffer,
    area: Rect,
    strain: &StrainRecord,
    options: CardOptions,
) {
    let type_line = if options.show_potency {
        format!(
            "{} • THC: {}%",
            strain.strain_type.to_string().to_uppercase(),
            strain.potency
        )
    } else {
        strain.strain_type.to_string().to_uppercase()
    };

    let mut lines = vec![
        Line::from(Span::styled(
            type_line,
            Style::default()
                .fg(strain_type_color(strain.strain_type))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            strain.description.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ];
    if options.show_location {
        lines.push(Line::from(Span::styled(
            format!("📍 {}", strain.location),
            Style::default().fg(Color::Green),
        )));
    }
    let mut effects = Vec::with_capacity(strain.effects.len() * 2);
    for effect in &strain.effects {
        effects.push(Span::styled(
            format!("[{effect}]"),
            Style::default().fg(Color::White),
        ));
        effects.push(Span::raw(" "));
    }
    lines.push(Line::from(effects));
    if options.discovered_badge {
        lines.push(Line::from(Span::styled(
            "✅ Discovered!",
            Style::default().fg(Color::Green),
        )));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(card_block(
            strain.name.as_str(),
            &strain.rarity.to_string(),
            rarity_color(strain.rarity),
        ))
        .render(area, buffer);
}

// Card for a strain that has not been discovered yet.
pub fn render_hidden_card(buffer: &mut Buffer, area: Rect) {
    Paragraph::new(Line::from(Span::styled(
        "Discover this strain to learn more!",
        Style::default().fg(Color::DarkGray),
    )))
    .block(card_block("???", "???", Color::DarkGray))
    .render(area, buffer);
}

fn card_block<'a>(name: &'a str, badge: &str, badge_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green))
        .title(Line::from(Span::styled(
            format!(" {name} "),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )))
        .title(
            Line::from(Span::styled(
                format!(" {badge} "),
                Style::default().fg(Color::Black).bg(badge_color),
            ))
            .right_aligned(),
        )
}
