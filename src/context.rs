use std::time::Instant;

use crate::{catalog::Catalog, message::MessageLog, player::PlayerState, settings::Settings};

// Read-only view of the application handed to components.
#[derive(Debug)]
pub struct Context<'a> {
    pub player: &'a PlayerState,
    pub catalog: &'a Catalog,
    pub messages: &'a MessageLog,
    pub settings: &'a Settings,
    pub now: Instant,
}
