use juniper::FieldResult;

use store::{Equipment, Supply, Team};

use crate::graphql_schemas::context::Context;

/// GraphQL view over a [Team] row. `supplies` joins through the store
/// lazily, so it resolves the same way for the list and the by-id lookups
/// and only runs when the client selects it.
pub(crate) struct TeamRow(pub Team);

#[juniper::graphql_object(context = Context, name = "Team", rename_all = "none")]
impl TeamRow {
    fn id(&self) -> i32 { self.0.id }

    fn manager(&self) -> &str { &self.0.manager }

    fn office(&self) -> &str { &self.0.office }

    fn extension_number(&self) -> &str { &self.0.extension_number }

    fn mascot(&self) -> &str { &self.0.mascot }

    fn cleaning_duty(&self) -> &str { &self.0.cleaning_duty }

    fn project(&self) -> &str { &self.0.project }

    #[graphql(description = "Supplies checked out to this team, in seed order")]
    fn supplies(&self, context: &Context) -> FieldResult<Vec<SupplyRow>> {
        Ok(context
            .read()?
            .supplies_for_team(self.0.id)
            .into_iter()
            .map(SupplyRow::from)
            .collect())
    }
}

#[derive(juniper::GraphQLObject)]
#[graphql(name = "Equipment", rename_all = "none")]
pub(crate) struct EquipmentRow {
    pub id: String,
    pub used_by: String,
    pub count: i32,
    pub new_or_used: String,
}

impl From<Equipment> for EquipmentRow {
    fn from(e: Equipment) -> Self {
        EquipmentRow {
            id: e.id,
            used_by: e.used_by,
            count: e.count,
            new_or_used: e.new_or_used,
        }
    }
}

#[derive(juniper::GraphQLObject)]
#[graphql(name = "Supply", rename_all = "none")]
pub(crate) struct SupplyRow {
    pub id: String,
    pub team: i32,
}

impl From<Supply> for SupplyRow {
    fn from(s: Supply) -> Self { SupplyRow { id: s.id, team: s.team } }
}
