//! Player actions and the notification each one produces.
//!
//! [`apply`] is the single entry point the UI uses: it runs one
//! [`GameAction`] against the player state and always returns exactly one
//! [`Message`]. Rejected actions leave the state untouched.

use crate::catalog::{Catalog, Location};
use crate::discovery::{self, RandomSource, SearchOutcome};
use crate::error::GameError;
use crate::message::Message;
use crate::player::PlayerState;

pub const TRAVEL_COST: u8 = 15;
pub const REST_RECOVERY: u8 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameAction {
    Search,
    Travel(String),
    Rest,
}

pub fn apply<R: RandomSource + ?Sized>(
    player: &mut PlayerState,
    catalog: &Catalog,
    action: &GameAction,
    rng: &mut R,
) -> Message {
    match action {
        GameAction::Search => match discovery::search(player, catalog, rng) {
            Ok(SearchOutcome::Discovered(strain)) => {
                log::debug!(
                    "Found {} ({}) in {}",
                    strain.id,
                    strain.rarity,
                    player.current_location()
                );
                Message::success(format!("🌿 Found {}!", strain.name))
            }
            Ok(SearchOutcome::NoLuck) => {
                log::debug!("Nothing found in {}", player.current_location());
                Message::info("Keep searching... 🔍")
            }
            Err(GameError::NothingLeftToFind { .. }) => {
                Message::info("You've found all strains in this area!")
            }
            Err(e) => {
                log::debug!("Search rejected: {e}");
                Message::error("Not enough energy! Rest to recover.")
            }
        },
        GameAction::Travel(destination) => match travel(player, catalog, destination) {
            Ok(location) => {
                log::info!("Traveled to {}", location.name);
                Message::success(format!("Traveled to {} ✈️", location.name))
            }
            Err(GameError::InsufficientEnergy { .. }) => {
                Message::error("Not enough energy to travel!")
            }
            Err(e) => {
                log::warn!("Travel rejected: {e}");
                Message::error(e.to_string())
            }
        },
        GameAction::Rest => {
            rest(player);
            Message::success("Feeling refreshed! 😌")
        }
    }
}

/// Moves the player to `destination` for [`TRAVEL_COST`] energy.
pub fn travel<'c>(
    player: &mut PlayerState,
    catalog: &'c Catalog,
    destination: &str,
) -> Result<&'c Location, GameError> {
    let location = catalog
        .location(destination)
        .ok_or_else(|| GameError::UnknownLocation(destination.to_string()))?;
    if location.name == player.current_location() {
        return Err(GameError::AlreadyThere(location.name.clone()));
    }

    player.spend_energy(TRAVEL_COST)?;
    player.move_to(&location.name);
    Ok(location)
}

/// Recovers [`REST_RECOVERY`] energy, capped at the maximum. Returns the amount gained.
pub fn rest(player: &mut PlayerState) -> u8 {
    player.restore_energy(REST_RECOVERY)
}
