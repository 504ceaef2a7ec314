use juniper::{EmptySubscription, FieldResult, RootNode};

use store::{Equipment, EquipmentPatch};

use crate::graphql_schemas::context::Context;
use crate::graphql_schemas::types::{EquipmentRow, SupplyRow, TeamRow};

pub struct QueryRoot;

#[juniper::graphql_object(context = Context)]
impl QueryRoot {
    #[graphql(description = "All teams, in seed order")]
    fn teams(context: &Context) -> FieldResult<Vec<TeamRow>> {
        Ok(context.read()?.teams().iter().cloned().map(TeamRow).collect())
    }

    #[graphql(description = "The first team under this id, if any")]
    fn team(context: &Context, id: i32) -> FieldResult<Option<TeamRow>> {
        Ok(context.read()?.team(id).cloned().map(TeamRow))
    }

    #[graphql(description = "The full equipment pool, unfiltered")]
    fn equipments(context: &Context) -> FieldResult<Vec<EquipmentRow>> {
        Ok(context.read()?.equipments().iter().cloned().map(EquipmentRow::from).collect())
    }

    #[graphql(description = "All supplies, unfiltered")]
    fn supplies(context: &Context) -> FieldResult<Vec<SupplyRow>> {
        Ok(context.read()?.supplies().iter().cloned().map(SupplyRow::from).collect())
    }
}

pub struct MutationRoot;

#[juniper::graphql_object(context = Context, rename_all = "none")]
impl MutationRoot {
    #[graphql(
        name = "insertEquipment",
        description = "Append an equipment record built from the arguments verbatim; ids are not deduplicated"
    )]
    fn insert_equipment(
        context: &Context,
        id: String,
        used_by: String,
        count: i32,
        new_or_used: String,
    ) -> FieldResult<EquipmentRow> {
        Ok(context
            .write()?
            .insert_equipment(Equipment { id, used_by, count, new_or_used })
            .into())
    }

    #[graphql(
        name = "deleteEquipment",
        description = "Remove every equipment record under this id; echoes the first removed one, or null on a miss"
    )]
    fn delete_equipment(context: &Context, id: String) -> FieldResult<Option<EquipmentRow>> {
        Ok(context.write()?.delete_equipment(&id).map(EquipmentRow::from))
    }

    #[graphql(
        name = "editEquipment",
        description = "Overwrite only the provided fields of every equipment record under this id; omitted fields keep their prior values"
    )]
    fn edit_equipment(
        context: &Context,
        id: String,
        used_by: Option<String>,
        count: Option<i32>,
        new_or_used: Option<String>,
    ) -> FieldResult<Option<EquipmentRow>> {
        let patch = EquipmentPatch { used_by, count, new_or_used };
        Ok(context.write()?.edit_equipment(&id, &patch).map(EquipmentRow::from))
    }
}

pub type Schema = RootNode<'static, QueryRoot, MutationRoot, EmptySubscription<Context>>;

pub fn create_schema() -> Schema { Schema::new(QueryRoot, MutationRoot, EmptySubscription::new()) }

#[cfg(test)]
mod tests {
    use std::sync::{Arc, RwLock};

    use juniper::{execute_sync, Variables};
    use pretty_assertions::assert_eq;

    use store::{Equipment, Inventory, Seed, Supply, Team};

    use super::create_schema;
    use crate::graphql_schemas::Context;

    fn team(id: i32, manager: &str) -> Team {
        Team {
            id,
            manager: manager.to_string(),
            office: format!("10{}A", id),
            extension_number: format!("#501{}", id),
            mascot: "Panda".to_string(),
            cleaning_duty: "Monday".to_string(),
            project: "Hydra".to_string()
        }
    }

    fn equipment(id: &str, used_by: &str, count: i32, new_or_used: &str) -> Equipment {
        Equipment {
            id: id.to_string(),
            used_by: used_by.to_string(),
            count,
            new_or_used: new_or_used.to_string()
        }
    }

    fn supply(id: &str, team: i32) -> Supply { Supply { id: id.to_string(), team } }

    fn context() -> Context {
        let seed = Seed {
            teams: vec![team(1, "Mandy Warren"), team(2, "Stewart Grant")],
            equipments: vec![
                equipment("notebook", "developer", 12, "new"),
                equipment("pen tablet", "designer", 5, "used")
            ],
            supplies: vec![
                supply("a4 paper", 1),
                supply("ink cartridge", 2),
                supply("coffee pod", 1)
            ]
        };
        Context::new(Arc::new(RwLock::new(Inventory::from_seed(seed))))
    }

    fn run(ctx: &Context, document: &str) -> juniper::Value {
        let schema = create_schema();
        let (value, errors) = execute_sync(document, None, &schema, &Variables::new(), ctx).unwrap();
        assert!(errors.is_empty(), "{:?}", errors);
        value
    }

    #[test]
    fn test_teams_attach_supplies() {
        let ctx = context();
        let value = run(&ctx, "{ teams { id manager supplies { id team } } }");
        assert_eq!(
            value,
            graphql_value!({
                "teams": [
                    {
                        "id": 1,
                        "manager": "Mandy Warren",
                        "supplies": [
                            { "id": "a4 paper", "team": 1 },
                            { "id": "coffee pod", "team": 1 }
                        ]
                    },
                    {
                        "id": 2,
                        "manager": "Stewart Grant",
                        "supplies": [{ "id": "ink cartridge", "team": 2 }]
                    }
                ]
            })
        );
    }

    #[test]
    fn test_team_by_id_attaches_supplies() {
        let ctx = context();
        let value = run(&ctx, "{ team(id: 1) { manager supplies { id } } }");
        assert_eq!(
            value,
            graphql_value!({
                "team": {
                    "manager": "Mandy Warren",
                    "supplies": [{ "id": "a4 paper" }, { "id": "coffee pod" }]
                }
            })
        );
    }

    #[test]
    fn test_teams_on_empty_store() {
        let ctx = Context::new(Arc::new(RwLock::new(Inventory::from_seed(Seed::default()))));
        let value = run(&ctx, "{ teams { id } }");
        assert_eq!(value, graphql_value!({ "teams": [] }));
    }

    #[test]
    fn test_team_miss_is_null() {
        let ctx = context();
        let value = run(&ctx, "{ team(id: 42) { id } }");
        assert_eq!(value, graphql_value!({ "team": null }));
    }

    #[test]
    fn test_equipments_and_supplies_lists() {
        let ctx = context();
        let value = run(&ctx, "{ equipments { id count } supplies { id team } }");
        assert_eq!(
            value,
            graphql_value!({
                "equipments": [
                    { "id": "notebook", "count": 12 },
                    { "id": "pen tablet", "count": 5 }
                ],
                "supplies": [
                    { "id": "a4 paper", "team": 1 },
                    { "id": "ink cartridge", "team": 2 },
                    { "id": "coffee pod", "team": 1 }
                ]
            })
        );
    }

    #[test]
    fn test_insert_equipment_appends() {
        let ctx = context();
        let value = run(
            &ctx,
            r#"mutation {
                insertEquipment(id: "laptop", used_by: "dev", count: 17, new_or_used: "new") {
                    id used_by count new_or_used
                }
            }"#,
        );
        assert_eq!(
            value,
            graphql_value!({
                "insertEquipment": {
                    "id": "laptop", "used_by": "dev", "count": 17, "new_or_used": "new"
                }
            })
        );
        let store = ctx.store.read().unwrap();
        assert_eq!(store.equipments().len(), 3);
        assert_eq!(store.equipments().last().map(|e| e.id.as_str()), Some("laptop"));
    }

    #[test]
    fn test_delete_equipment_echoes_prior_record() {
        let ctx = context();
        let value = run(
            &ctx,
            r#"mutation { deleteEquipment(id: "notebook") { id used_by count new_or_used } }"#,
        );
        assert_eq!(
            value,
            graphql_value!({
                "deleteEquipment": {
                    "id": "notebook", "used_by": "developer", "count": 12, "new_or_used": "new"
                }
            })
        );
        let store = ctx.store.read().unwrap();
        assert!(!store.equipments().iter().any(|e| e.id == "notebook"));
    }

    #[test]
    fn test_delete_miss_is_null() {
        let ctx = context();
        let value = run(&ctx, r#"mutation { deleteEquipment(id: "nonexistent") { id } }"#);
        assert_eq!(value, graphql_value!({ "deleteEquipment": null }));
        assert_eq!(ctx.store.read().unwrap().equipments().len(), 2);
    }

    #[test]
    fn test_edit_equipment_partial_update() {
        let ctx = context();
        let value = run(
            &ctx,
            r#"mutation { editEquipment(id: "pen tablet", count: 30) { id used_by count new_or_used } }"#,
        );
        assert_eq!(
            value,
            graphql_value!({
                "editEquipment": {
                    "id": "pen tablet", "used_by": "designer", "count": 30, "new_or_used": "used"
                }
            })
        );
    }

    #[test]
    fn test_edit_miss_is_null() {
        let ctx = context();
        let value = run(&ctx, r#"mutation { editEquipment(id: "nonexistent", count: 1) { id } }"#);
        assert_eq!(value, graphql_value!({ "editEquipment": null }));
    }
}
