// ui/trail_walk.rs

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::*,
};

use super::{
    Component, ComponentEnum, MainMenu,
    constants::TRAIL_HINT,
    utils::{center_rect, message_color, render_too_small},
};
use crate::{
    app::Action,
    context::Context,
    trail::{self, Tile, TrailWalker},
};

// Each tile is drawn two cells wide so the map looks roughly square.
const TILE_WIDTH: u16 = 2;

#[derive(Debug, Default)]
pub struct TrailWalk {
    walker: TrailWalker,
}

impl Component for TrailWalk {
    fn on_key(&mut self, key: KeyEvent, _context: &Context) -> Option<Action> {
        let direction = match key.code {
            KeyCode::Up | KeyCode::Char('k') => trail::Direction::Up,
            KeyCode::Down | KeyCode::Char('j') => trail::Direction::Down,
            KeyCode::Left | KeyCode::Char('h') => trail::Direction::Left,
            KeyCode::Right | KeyCode::Char('l') => trail::Direction::Right,
            KeyCode::Esc | KeyCode::Char('q') => {
                return Some(Action::SwitchComponent(ComponentEnum::from(
                    MainMenu::default(),
                )));
            }
            _ => return None,
        };
        self.walker.step(direction).message().map(Action::Notify)
    }

    fn render(&mut self, area: Rect, buffer: &mut Buffer, context: &Context) {
        if render_too_small(area, buffer) {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        Paragraph::new("Strain Collector")
            .style(Style::default().fg(Color::LightGreen))
            .alignment(Alignment::Center)
            .render(chunks[0], buffer);

        self.render_map(buffer, chunks[1]);

        if let Some(message) = context.messages.toast(context.now) {
            Paragraph::new(message.content.as_str())
                .style(Style::default().fg(message_color(message.message_type)))
                .alignment(Alignment::Center)
                .render(chunks[2], buffer);
        }

        Paragraph::new(TRAIL_HINT)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(chunks[3], buffer);
    }
}

impl TrailWalk {
    pub fn walker(&self) -> &TrailWalker {
        &self.walker
    }

    fn render_map(&self, buffer: &mut Buffer, area: Rect) {
        let map = self.walker.map();
        let (px, py) = self.walker.position();
        let width = map.width() as u16 * TILE_WIDTH + 2;
        let height = map.height() as u16 + 2;
        let map_area = center_rect(area, Constraint::Length(width), Constraint::Length(height));

        let lines: Vec<Line> = map
            .rows()
            .iter()
            .enumerate()
            .map(|(y, row)| {
                Line::from(
                    row.iter()
                        .enumerate()
                        .map(|(x, tile)| {
                            if (x as i32, y as i32) == (px, py) {
                                Span::styled("@@", Style::default().fg(Color::White).bg(Color::Blue))
                            } else {
                                tile_span(*tile)
                            }
                        })
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Green)),
            )
            .render(map_area, buffer);
    }
}

fn tile_span(tile: Tile) -> Span<'static> {
    match tile {
        Tile::Blocking => Span::styled("♣♣", Style::default().fg(Color::LightGreen).bg(Color::Green)),
        Tile::Walkable => Span::styled("  ", Style::default().bg(Color::LightGreen)),
        Tile::Special => Span::styled("✦✦", Style::default().fg(Color::Black).bg(Color::Yellow)),
    }
}
