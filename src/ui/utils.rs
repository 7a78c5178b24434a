// ui/utils.rs

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Widget},
};

use crate::catalog::{Rarity, StrainType};
use crate::message::MessageType;

pub const MIN_WIDTH: u16 = 80;
pub const MIN_HEIGHT: u16 = 30;

pub fn center_rect(area: Rect, horizontal: Constraint, vertical: Constraint) -> Rect {
    let [area] = Layout::horizontal([horizontal])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([vertical]).flex(Flex::Center).areas(area);
    area
}

/// Renders the resize warning and returns true when `area` is below the minimum size.
pub fn render_too_small(area: Rect, buffer: &mut Buffer) -> bool {
    if area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT {
        return false;
    }
    Paragraph::new("Terminal too small. Please resize.")
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center)
        .render(area, buffer);
    true
}

pub fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::Green,
        Rarity::Rare => Color::Blue,
        Rarity::Legendary => Color::Magenta,
    }
}

pub fn strain_type_color(strain_type: StrainType) -> Color {
    match strain_type {
        StrainType::Sativa => Color::LightRed,
        StrainType::Indica => Color::Magenta,
        StrainType::Hybrid => Color::Green,
    }
}

pub fn message_color(message_type: MessageType) -> Color {
    match message_type {
        MessageType::Success => Color::Green,
        MessageType::Error => Color::Red,
        MessageType::Info => Color::Yellow,
    }
}
