// src/ui/main_menu.rs

use super::{
    Component, ComponentEnum, GameView, TrailWalk,
    constants::{ART, MAIN_MENU_HINT, TITLE},
    utils::{center_rect, message_color, render_too_small},
};
use crate::{app::Action, context::Context};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::*,
};

const MENU_ITEMS: [&str; 3] = ["Collect strains", "Trail walk", "Quit"];

#[derive(Debug)]
pub struct MainMenu {
    state: ListState,
}

impl Default for MainMenu {
    fn default() -> Self {
        let mut state = ListState::default();
        state.select(Some(0));
        Self { state }
    }
}

impl Component for MainMenu {
    fn on_key(&mut self, key: KeyEvent, _context: &Context) -> Option<Action> {
        match key.code {
            KeyCode::Enter => self.state.selected().and_then(Self::choose),
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.select_previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let next = self
                    .state
                    .selected()
                    .map_or(0, |selected| (selected + 1).min(MENU_ITEMS.len() - 1));
                self.state.select(Some(next));
                None
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char(c) => {
                let digit = c.to_digit(10)? as usize;
                if (1..=MENU_ITEMS.len()).contains(&digit) {
                    self.state.select(Some(digit - 1));
                    Self::choose(digit - 1)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn render(&mut self, area: Rect, buffer: &mut Buffer, context: &Context) {
        if render_too_small(area, buffer) {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(10),
                Constraint::Length(6),
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        render_header(buffer, chunks[0]);
        render_art(buffer, chunks[1]);
        render_title(buffer, chunks[2]);
        render_console(buffer, context, chunks[3]);
        self.render_menu(buffer, chunks[4]);
        render_status(buffer, chunks[5]);
    }
}

impl MainMenu {
    fn choose(index: usize) -> Option<Action> {
        match index {
            0 => Some(Action::SwitchComponent(ComponentEnum::from(
                GameView::default(),
            ))),
            1 => Some(Action::SwitchComponent(ComponentEnum::from(
                TrailWalk::default(),
            ))),
            2 => Some(Action::Quit),
            _ => None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    fn render_menu(&mut self, buffer: &mut Buffer, area: Rect) {
        let selected = self.state.selected().unwrap_or(0);
        let menu_lines: Vec<Line> = MENU_ITEMS
            .iter()
            .enumerate()
            .map(|(i, &item)| {
                let number = format!("{}. ", i + 1);
                if i == selected {
                    Line::from(vec![
                        Span::styled(number, Style::default().fg(Color::Yellow)),
                        Span::styled(
                            item,
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ])
                } else {
                    Line::from(vec![Span::raw(number), Span::raw(item)])
                }
            })
            .collect();

        let max_width = menu_lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
        let centered_area = center_rect(
            area,
            Constraint::Length(max_width),
            Constraint::Length(MENU_ITEMS.len() as u16),
        );

        Paragraph::new(menu_lines)
            .alignment(Alignment::Left)
            .style(Style::default().fg(Color::White))
            .render(centered_area, buffer);
    }
}

pub fn render_header(buffer: &mut Buffer, area: Rect) {
    Paragraph::new(format!("Strain Collector v{}", env!("CARGO_PKG_VERSION")))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .render(area, buffer);
}

pub fn render_art(buffer: &mut Buffer, area: Rect) {
    let inner_rect = center_rect(area, Constraint::Length(60), Constraint::Length(10));
    Paragraph::new(ART)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .block(
            Block::default()
                .border_type(BorderType::Rounded)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(inner_rect, buffer);
}

pub fn render_title(buffer: &mut Buffer, area: Rect) {
    let title_area = center_rect(area, Constraint::Length(60), Constraint::Length(5));
    Paragraph::new(TITLE)
        .alignment(Alignment::Left)
        .style(Style::default().fg(Color::Green))
        .render(title_area, buffer);
}

// Last notification, so messages raised elsewhere are still seen from the menu.
fn render_console(buffer: &mut Buffer, context: &Context, area: Rect) {
    if let Some(message) = context.messages.toast(context.now) {
        Paragraph::new(message.content.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(message_color(message.message_type)))
            .render(area, buffer);
    }
}

fn render_status(buffer: &mut Buffer, area: Rect) {
    Paragraph::new(MAIN_MENU_HINT)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .render(area, buffer);
}
