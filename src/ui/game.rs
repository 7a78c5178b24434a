// ui/game.rs

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::*,
};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use super::{
    Component, ComponentEnum, MainMenu,
    constants::{BROWSE_HINT, EXPLORE_HINT},
    dex, explore, stash,
    strain_card::CARD_HEIGHT,
    utils::{message_color, render_too_small},
};
use crate::{
    actions::GameAction, app::Action, context::Context, player::MAX_ENERGY,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter)]
pub enum Tab {
    #[default]
    Explore,
    #[strum(to_string = "Strain Dex")]
    StrainDex,
    Stash,
}

impl Tab {
    fn index(self) -> usize {
        Tab::iter().position(|tab| tab == self).unwrap_or(0)
    }

    fn from_index(index: usize) -> Self {
        Tab::iter().nth(index % Tab::iter().count()).unwrap_or_default()
    }

    fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    fn previous(self) -> Self {
        Self::from_index(self.index() + Tab::iter().count() - 1)
    }
}

// The tabbed in-game screen: header, tab bar, body, toast and key hints.
#[derive(Debug)]
pub struct GameView {
    tab: Tab,
    destination: ListState,
    stash: TableState,
}

impl Default for GameView {
    fn default() -> Self {
        let mut destination = ListState::default();
        destination.select(Some(0));
        Self {
            tab: Tab::default(),
            destination,
            stash: TableState::default(),
        }
    }
}

impl Component for GameView {
    fn on_key(&mut self, key: KeyEvent, context: &Context) -> Option<Action> {
        match key.code {
            KeyCode::Esc => {
                return Some(Action::SwitchComponent(ComponentEnum::from(
                    MainMenu::default(),
                )));
            }
            KeyCode::Tab => {
                self.tab = self.tab.next();
                return None;
            }
            KeyCode::BackTab => {
                self.tab = self.tab.previous();
                return None;
            }
            KeyCode::Char(c @ '1'..='3') => {
                self.tab = Tab::from_index(c as usize - '1' as usize);
                return None;
            }
            _ => {}
        }

        match self.tab {
            Tab::Explore => self.on_explore_key(key, context),
            Tab::StrainDex => None,
            Tab::Stash => {
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => self.stash.select_previous(),
                    KeyCode::Down | KeyCode::Char('j') => self.stash.select_next(),
                    _ => {}
                }
                None
            }
        }
    }

    fn render(&mut self, area: Rect, buffer: &mut Buffer, context: &Context) {
        if render_too_small(area, buffer) {
            return;
        }

        let history_height = if context.settings.debug_mode { 1 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(history_height),
                Constraint::Length(1),
            ])
            .split(area);

        render_header(buffer, context, chunks[0]);
        self.render_tabs(buffer, chunks[1]);
        match self.tab {
            Tab::Explore => explore::render(buffer, context, chunks[2], &mut self.destination),
            Tab::StrainDex => dex::render(buffer, context, chunks[2]),
            Tab::Stash => stash::render(buffer, context, chunks[2], &mut self.stash),
        }
        render_toast(buffer, context, chunks[3]);
        if context.settings.debug_mode {
            render_history(buffer, context, chunks[4]);
        }
        self.render_status(buffer, chunks[5]);
    }
}

impl GameView {
    pub fn tab(&self) -> Tab {
        self.tab
    }

    fn on_explore_key(&mut self, key: KeyEvent, context: &Context) -> Option<Action> {
        let locations = context.catalog.locations();
        match key.code {
            KeyCode::Char('s') => Some(Action::Game(GameAction::Search)),
            KeyCode::Char('r') => Some(Action::Game(GameAction::Rest)),
            KeyCode::Up | KeyCode::Char('k') => {
                self.destination.select_previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let next = self
                    .destination
                    .selected()
                    .map_or(0, |selected| (selected + 1).min(locations.len().saturating_sub(1)));
                self.destination.select(Some(next));
                None
            }
            KeyCode::Enter => self
                .destination
                .selected()
                .and_then(|selected| locations.get(selected))
                .map(|location| Action::Game(GameAction::Travel(location.name.clone()))),
            _ => None,
        }
    }

    fn render_tabs(&self, buffer: &mut Buffer, area: Rect) {
        let titles = Tab::iter().enumerate().map(|(i, tab)| {
            Line::from(vec![
                Span::styled(format!("{}.", i + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(tab.to_string()),
            ])
        });
        Tabs::new(titles)
            .select(self.tab.index())
            .style(Style::default().fg(Color::Green))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buffer);
    }

    fn render_status(&self, buffer: &mut Buffer, area: Rect) {
        let hint = match self.tab {
            Tab::Explore => EXPLORE_HINT,
            Tab::StrainDex | Tab::Stash => BROWSE_HINT,
        };
        Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(area, buffer);
    }
}

fn render_header(buffer: &mut Buffer, context: &Context, area: Rect) {
    let player = context.player;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green))
        .title(Line::from(" 🌿 STRAIN COLLECTOR 🌿 ").bold().green());
    let inner = block.inner(area);
    block.render(area, buffer);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(inner);

    Paragraph::new(format!("Level {} • {}", player.level, player.name))
        .style(Style::default().fg(Color::LightGreen))
        .render(chunks[0], buffer);

    Gauge::default()
        .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
        .ratio(f64::from(player.energy()) / f64::from(MAX_ENERGY))
        .label(format!("Energy {}", player.energy()))
        .render(chunks[1], buffer);

    Paragraph::new(format!(
        "EXP: {}  💰 ${}",
        player.experience(),
        player.money
    ))
    .style(Style::default().fg(Color::LightGreen))
    .alignment(Alignment::Right)
    .render(chunks[2], buffer);
}

fn render_toast(buffer: &mut Buffer, context: &Context, area: Rect) {
    if let Some(message) = context.messages.toast(context.now) {
        Paragraph::new(message.content.as_str())
            .style(
                Style::default()
                    .fg(message_color(message.message_type))
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .render(area, buffer);
    }
}

fn render_history(buffer: &mut Buffer, context: &Context, area: Rect) {
    let history: Vec<&str> = context
        .messages
        .history()
        .rev()
        .take(5)
        .map(|message| message.content.as_str())
        .collect();
    Paragraph::new(format!("[{}] {}", context.messages.len(), history.join(" | ")))
        .style(Style::default().fg(Color::Gray))
        .render(area, buffer);
}

/// Two-column card slots filling `area` top-down; stops when a row no longer fits.
pub(super) fn card_slots(area: Rect, count: usize) -> Vec<Rect> {
    let rows = usize::from(area.height / CARD_HEIGHT);
    let mut slots = Vec::with_capacity(count.min(rows * 2));
    for row in 0..rows {
        let row_area = Rect::new(
            area.x,
            area.y + row as u16 * CARD_HEIGHT,
            area.width,
            CARD_HEIGHT,
        );
        let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row_area);
        for column in columns.iter() {
            if slots.len() == count {
                return slots;
            }
            slots.push(*column);
        }
    }
    slots
}
