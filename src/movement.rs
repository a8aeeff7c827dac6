use serde::{Deserialize, Serialize};

use crate::unit::Unit;

/// Key the external key-value store files logged movements under.
pub const MOVEMENTS_STORAGE_KEY: &str = "movements";

/// Key the external key-value store files the user profile under.
pub const USER_STORAGE_KEY: &str = "user";

/// A logged movement as exchanged with the sync and export boundaries. The
/// `weight` values are plain numbers in whatever unit they were recorded in;
/// callers reproject explicitly before mixing units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub name: String,
    pub data: Vec<MovementData>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovementData {
    /// ISO date string.
    pub date: String,
    pub weight: f64,
    pub reps: u32,
    pub set: u32,
}

impl Movement {
    /// The heaviest logged entry, if any.
    #[must_use]
    pub fn pr(&self) -> Option<&MovementData> {
        self.data.iter().max_by(|a, b| {
            a.weight
                .partial_cmp(&b.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePreferences {
    pub weight_unit: Unit,
    pub theme: Theme,
}

/// The per-user document exchanged with the bootstrap boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub gender: Gender,
    pub preferences: ProfilePreferences,
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile {
            gender: Gender::M,
            preferences: ProfilePreferences {
                weight_unit: Unit::Pound,
                theme: Theme::Light,
            },
        }
    }
}
