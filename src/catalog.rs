//! Static strain and location tables.
//!
//! The built-in catalog is created once on first access and never mutated.
//! Custom catalogs can be assembled with [`Catalog::new`], which validates
//! them the same way the built-in one is checked at startup.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::error::CatalogError;
use crate::player::PlayerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StrainType {
    Sativa,
    Indica,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl Rarity {
    /// Experience granted for discovering a strain of this rarity.
    pub fn experience_reward(self) -> u32 {
        match self {
            Rarity::Common => 10,
            Rarity::Rare => 25,
            Rarity::Legendary => 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrainRecord {
    pub id: String,
    pub name: String,
    pub strain_type: StrainType,
    pub rarity: Rarity,
    pub potency: u8, // THC percentage.
    pub effects: Vec<String>,
    pub description: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    strains: Vec<StrainRecord>,
    locations: Vec<Location>,
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    strains: builtin_strains(),
    locations: builtin_locations(),
});

impl Catalog {
    pub fn new(
        strains: Vec<StrainRecord>,
        locations: Vec<Location>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self { strains, locations };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The game's own five strains and five locations.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut names = HashSet::new();
        for location in &self.locations {
            if !names.insert(location.name.as_str()) {
                return Err(CatalogError::DuplicateLocation(location.name.clone()));
            }
        }

        let mut ids = HashSet::new();
        for strain in &self.strains {
            if !ids.insert(strain.id.as_str()) {
                return Err(CatalogError::DuplicateStrain(strain.id.clone()));
            }
            if !names.contains(strain.location.as_str()) {
                return Err(CatalogError::UnknownHome {
                    strain: strain.id.clone(),
                    location: strain.location.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn strains(&self) -> &[StrainRecord] {
        &self.strains
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn strain(&self, id: &str) -> Option<&StrainRecord> {
        self.strains.iter().find(|strain| strain.id == id)
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.name == name)
    }

    /// Strains whose home is `location`, in catalog order.
    pub fn strains_at<'a>(&'a self, location: &'a str) -> impl Iterator<Item = &'a StrainRecord> {
        self.strains
            .iter()
            .filter(move |strain| strain.location == location)
    }

    /// Catalog entries the player has discovered, in catalog order.
    pub fn discovered_strains<'a>(
        &'a self,
        player: &'a PlayerState,
    ) -> impl Iterator<Item = &'a StrainRecord> {
        self.strains
            .iter()
            .filter(move |strain| player.has_discovered(&strain.id))
    }

    /// `(discovered, total)` for the Strain Dex progress bar.
    pub fn completion(&self, player: &PlayerState) -> (usize, usize) {
        (self.discovered_strains(player).count(), self.strains.len())
    }
}

fn strain(
    id: &str,
    name: &str,
    strain_type: StrainType,
    rarity: Rarity,
    potency: u8,
    effects: [&str; 3],
    description: &str,
    location: &str,
) -> StrainRecord {
    StrainRecord {
        id: id.to_string(),
        name: name.to_string(),
        strain_type,
        rarity,
        potency,
        effects: effects.iter().map(|effect| effect.to_string()).collect(),
        description: description.to_string(),
        location: location.to_string(),
    }
}

fn builtin_strains() -> Vec<StrainRecord> {
    vec![
        strain(
            "og-kush",
            "OG Kush",
            StrainType::Hybrid,
            Rarity::Common,
            24,
            ["relaxed", "euphoric", "sleepy"],
            "A classic West Coast strain with earthy, pine, and lemon flavors.",
            "Forest Grove",
        ),
        strain(
            "blue-dream",
            "Blue Dream",
            StrainType::Hybrid,
            Rarity::Common,
            18,
            ["creative", "energetic", "happy"],
            "Sweet berry aroma with balanced cerebral stimulation.",
            "Meadow Fields",
        ),
        strain(
            "white-widow",
            "White Widow",
            StrainType::Hybrid,
            Rarity::Rare,
            25,
            ["focused", "creative", "uplifted"],
            "Legendary strain with crystal-white trichomes.",
            "Mountain Peak",
        ),
        strain(
            "northern-lights",
            "Northern Lights",
            StrainType::Indica,
            Rarity::Rare,
            16,
            ["relaxed", "sleepy", "hungry"],
            "Dreamy, euphoric high that relaxes muscles and pacifies the mind.",
            "Arctic Valley",
        ),
        strain(
            "purple-haze",
            "Purple Haze",
            StrainType::Sativa,
            Rarity::Legendary,
            20,
            ["euphoric", "creative", "energetic"],
            "Legendary strain made famous by Jimi Hendrix.",
            "Psychedelic Gardens",
        ),
    ]
}

fn builtin_locations() -> Vec<Location> {
    [
        ("Forest Grove", "🌲", "Dense forest with hidden treasures"),
        ("Meadow Fields", "🌾", "Peaceful grasslands under the sun"),
        ("Mountain Peak", "⛰️", "High altitude with rare finds"),
        ("Arctic Valley", "❄️", "Cold region with unique strains"),
        ("Psychedelic Gardens", "🌈", "Mystical garden of legends"),
    ]
    .into_iter()
    .map(|(name, icon, description)| Location {
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
    })
    .collect()
}
