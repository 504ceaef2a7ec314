use serde::{Deserialize, Serialize};

/// A team on the office floor. `id` is assumed unique by lookups but never
/// enforced on the seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i32,
    pub manager: String,
    pub office: String,
    pub extension_number: String,
    pub mascot: String,
    pub cleaning_duty: String,
    pub project: String,
}

/// A pooled piece of equipment, keyed by exact `id` string match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub used_by: String,
    pub count: i32,
    pub new_or_used: String,
}

/// A consumable assigned to a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supply {
    pub id: String,
    /// Id of the owning [Team]. Not validated against the team list.
    pub team: i32,
}

/// Field-wise overlay for an [Equipment] record. `None` means "not provided,
/// keep the prior value"; only set fields are written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentPatch {
    pub used_by: Option<String>,
    pub count: Option<i32>,
    pub new_or_used: Option<String>,
}

impl EquipmentPatch {
    pub fn apply(&self, equipment: &mut Equipment) {
        if let Some(used_by) = &self.used_by {
            equipment.used_by = used_by.clone();
        }
        if let Some(count) = self.count {
            equipment.count = count;
        }
        if let Some(new_or_used) = &self.new_or_used {
            equipment.new_or_used = new_or_used.clone();
        }
    }
}

/// Initial contents of the three collections, read from the configuration
/// file at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub equipments: Vec<Equipment>,
    #[serde(default)]
    pub supplies: Vec<Supply>,
}
