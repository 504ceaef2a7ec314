use crate::records::{Equipment, EquipmentPatch, Seed, Supply, Team};

/// Owner of the three ordered collections. Resolvers borrow it for the span
/// of a single operation; lookups never signal a fault, an absent match is
/// just `None`.
#[derive(Debug, Default)]
pub struct Inventory {
    teams: Vec<Team>,
    equipments: Vec<Equipment>,
    supplies: Vec<Supply>,
}

impl Inventory {
    pub fn from_seed(seed: Seed) -> Self {
        Inventory {
            teams: seed.teams,
            equipments: seed.equipments,
            supplies: seed.supplies,
        }
    }

    pub fn teams(&self) -> &[Team] { &self.teams }

    pub fn equipments(&self) -> &[Equipment] { &self.equipments }

    pub fn supplies(&self) -> &[Supply] { &self.supplies }

    /// First team under this id, if any.
    pub fn team(&self, id: i32) -> Option<&Team> { self.teams.iter().find(|t| t.id == id) }

    /// Supplies owned by `team_id`, preserving seed order.
    pub fn supplies_for_team(&self, team_id: i32) -> Vec<Supply> {
        self.supplies.iter().filter(|s| s.team == team_id).cloned().collect()
    }

    /// Appends the record verbatim and echoes it back. A second record under
    /// an already present id is accepted as-is.
    pub fn insert_equipment(&mut self, equipment: Equipment) -> Equipment {
        debug!("inserting equipment {:?}", equipment.id);
        self.equipments.push(equipment.clone());
        equipment
    }

    /// Removes every record under `id` and returns the first removed one, in
    /// prior order. A miss leaves the pool untouched.
    pub fn delete_equipment(&mut self, id: &str) -> Option<Equipment> {
        let deleted = self.equipments.iter().find(|e| e.id == id).cloned();
        if deleted.is_some() {
            debug!("deleting equipment {:?}", id);
            self.equipments.retain(|e| e.id != id);
        }
        deleted
    }

    /// Merges the set fields of `patch` into every record under `id` and
    /// returns the first updated one.
    pub fn edit_equipment(&mut self, id: &str, patch: &EquipmentPatch) -> Option<Equipment> {
        let mut first = None;
        for equipment in self.equipments.iter_mut().filter(|e| e.id == id) {
            patch.apply(equipment);
            if first.is_none() {
                debug!("editing equipment {:?}", id);
                first = Some(equipment.clone());
            }
        }
        first
    }
}
