use juniper::{FieldError, FieldResult};

pub use context::Context;
pub use root::{create_schema, Schema};

mod context;
pub mod root;
mod types;

fn lock_poisoned<T>() -> FieldResult<T> {
    Err(FieldError::new(
        "Store unavailable",
        graphql_value!({ "unavailable": "store lock poisoned" }),
    ))
}
