use crossterm::event::KeyEvent;
use enum_dispatch::enum_dispatch;
use ratatui::{buffer::Buffer, layout::Rect};
use std::fmt::Debug;

use super::{GameView, MainMenu, TrailWalk};
use crate::{app::Action, context::Context};

#[enum_dispatch]
pub trait Component: Debug {
    fn on_key(&mut self, key: KeyEvent, context: &Context) -> Option<Action>;
    fn render(&mut self, area: Rect, buffer: &mut Buffer, context: &Context);
}

#[enum_dispatch(Component)]
#[derive(Debug)]
pub enum ComponentEnum {
    MainMenu,
    GameView,
    TrailWalk,
}
