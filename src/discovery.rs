//! Resolution of a single "search" at the player's current location.
//!
//! A search costs [`SEARCH_COST`] energy. When undiscovered strains remain at
//! the location, a uniform draw below [`DISCOVERY_THRESHOLD`] finds one of
//! them, picked uniformly; anything else is a miss worth
//! [`NO_LUCK_EXPERIENCE`].
//!
//! ```
//! use strain_collector::catalog::Catalog;
//! use strain_collector::discovery::{search, ScriptedRandom, SearchOutcome};
//! use strain_collector::player::PlayerState;
//!
//! let mut player = PlayerState::default();
//! let mut rng = ScriptedRandom::new([0.1], [0]);
//! let outcome = search(&mut player, Catalog::builtin(), &mut rng).unwrap();
//! assert!(matches!(outcome, SearchOutcome::Discovered(strain) if strain.id == "og-kush"));
//! assert_eq!(player.energy(), 90);
//! ```

use std::collections::VecDeque;

use rand::Rng;

use crate::catalog::{Catalog, StrainRecord};
use crate::error::GameError;
use crate::player::PlayerState;

pub const SEARCH_COST: u8 = 10;
pub const DISCOVERY_THRESHOLD: f64 = 0.30;
pub const NO_LUCK_EXPERIENCE: u32 = 2;

/// Source of the two random decisions a search makes.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// Uniform index in `[0, len)`. Only called with `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn roll(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Replays fixed rolls and picks, repeating the last value of each once the
/// script runs out. An empty roll script always misses; an empty pick script
/// always picks the first candidate.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    rolls: VecDeque<f64>,
    picks: VecDeque<usize>,
    last_roll: Option<f64>,
    last_pick: Option<usize>,
}

impl ScriptedRandom {
    pub fn new(
        rolls: impl IntoIterator<Item = f64>,
        picks: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            picks: picks.into_iter().collect(),
            last_roll: None,
            last_pick: None,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn roll(&mut self) -> f64 {
        if let Some(roll) = self.rolls.pop_front() {
            self.last_roll = Some(roll);
        }
        self.last_roll.unwrap_or(1.0).clamp(0.0, 1.0 - f64::EPSILON)
    }

    fn pick(&mut self, len: usize) -> usize {
        if let Some(pick) = self.picks.pop_front() {
            self.last_pick = Some(pick);
        }
        self.last_pick.unwrap_or(0).min(len.saturating_sub(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome<'c> {
    Discovered(&'c StrainRecord),
    NoLuck,
}

impl SearchOutcome<'_> {
    pub fn experience(&self) -> u32 {
        match self {
            SearchOutcome::Discovered(strain) => strain.rarity.experience_reward(),
            SearchOutcome::NoLuck => NO_LUCK_EXPERIENCE,
        }
    }
}

/// Strains at the player's location that have not been discovered yet.
pub fn candidates<'c>(player: &PlayerState, catalog: &'c Catalog) -> Vec<&'c StrainRecord> {
    catalog
        .strains()
        .iter()
        .filter(|strain| strain.location == player.current_location())
        .filter(|strain| !player.has_discovered(&strain.id))
        .collect()
}

/// Runs one search. On `Err` the player state is untouched.
pub fn search<'c, R: RandomSource + ?Sized>(
    player: &mut PlayerState,
    catalog: &'c Catalog,
    rng: &mut R,
) -> Result<SearchOutcome<'c>, GameError> {
    player.ensure_energy(SEARCH_COST)?;

    let candidates = candidates(player, catalog);
    if candidates.is_empty() {
        return Err(GameError::NothingLeftToFind {
            location: player.current_location().to_string(),
        });
    }

    let outcome = if rng.roll() < DISCOVERY_THRESHOLD {
        let index = rng.pick(candidates.len()).min(candidates.len() - 1);
        SearchOutcome::Discovered(candidates[index])
    } else {
        SearchOutcome::NoLuck
    };

    player.spend_energy(SEARCH_COST)?;
    if let SearchOutcome::Discovered(strain) = outcome {
        player.record_find(strain);
    }
    player.gain_experience(outcome.experience());

    Ok(outcome)
}
