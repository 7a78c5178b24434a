use crate::catalog::StrainRecord;
use crate::error::GameError;

pub const MAX_ENERGY: u8 = 100;
pub const DEFAULT_PLAYER_NAME: &str = "Chill Dude";
pub const STARTING_LOCATION: &str = "Forest Grove";
pub const STARTING_MONEY: u32 = 50;

// Mutable state of the current session.
//
// Energy, experience, location and the collections are only changed through
// the methods below, which keep energy in [0, MAX_ENERGY] and the discovered
// list a subset of the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub name: String,
    pub level: u32,
    pub money: u32,
    experience: u32,
    current_location: String,
    energy: u8,
    discovered: Vec<String>,
    inventory: Vec<String>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME)
    }
}

impl PlayerState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: 1,
            money: STARTING_MONEY,
            experience: 0,
            current_location: STARTING_LOCATION.to_string(),
            energy: MAX_ENERGY,
            discovered: Vec::new(),
            inventory: Vec::new(),
        }
    }

    /// Same defaults, different energy. Values above the cap are clamped.
    pub fn with_energy(mut self, energy: u8) -> Self {
        self.energy = energy.min(MAX_ENERGY);
        self
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn current_location(&self) -> &str {
        &self.current_location
    }

    pub fn energy(&self) -> u8 {
        self.energy
    }

    /// Discovered strain ids in discovery order.
    pub fn discovered(&self) -> &[String] {
        &self.discovered
    }

    /// Owned strain ids, duplicates included.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    pub fn has_discovered(&self, strain_id: &str) -> bool {
        self.discovered.iter().any(|id| id == strain_id)
    }

    pub fn ensure_energy(&self, required: u8) -> Result<(), GameError> {
        if self.energy < required {
            return Err(GameError::InsufficientEnergy {
                required,
                available: self.energy,
            });
        }
        Ok(())
    }

    pub(crate) fn spend_energy(&mut self, cost: u8) -> Result<(), GameError> {
        self.ensure_energy(cost)?;
        self.energy -= cost;
        Ok(())
    }

    /// Returns how much energy was actually gained.
    pub(crate) fn restore_energy(&mut self, amount: u8) -> u8 {
        let before = self.energy;
        self.energy = self.energy.saturating_add(amount).min(MAX_ENERGY);
        self.energy - before
    }

    pub(crate) fn gain_experience(&mut self, amount: u32) {
        self.experience = self.experience.saturating_add(amount);
    }

    pub(crate) fn move_to(&mut self, location: &str) {
        self.current_location = location.to_string();
    }

    pub(crate) fn record_find(&mut self, strain: &StrainRecord) {
        if !self.has_discovered(&strain.id) {
            self.discovered.push(strain.id.clone());
        }
        self.inventory.push(strain.id.clone());
    }
}
