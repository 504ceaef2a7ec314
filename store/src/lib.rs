/*!
In-memory record set for the quartermaster API.

# Overview

Holds the office floor data: teams, the supplies checked out to them, and the
shared equipment pool. Collections are seeded once from configuration and then
mutated in place; nothing is persisted across restarts.
 */

#[macro_use]
extern crate log;

pub use inventory::Inventory;
pub use records::{Equipment, EquipmentPatch, Seed, Supply, Team};

mod inventory;
mod records;
