// ui/mod.rs

mod component;
pub mod constants;
mod dex;
mod explore;
pub mod game;
pub mod main_menu;
mod stash;
mod strain_card;
pub mod trail_walk;
pub mod utils;

pub use component::{Component, ComponentEnum};
pub use game::{GameView, Tab};
pub use main_menu::MainMenu;
pub use trail_walk::TrailWalk;
pub use utils::{MIN_HEIGHT, MIN_WIDTH, center_rect};
