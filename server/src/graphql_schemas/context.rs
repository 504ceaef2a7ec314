use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use juniper::FieldResult;

use store::Inventory;

use crate::graphql_schemas::lock_poisoned;

/// Shared state handed to every resolver invocation. The store is owned
/// explicitly and passed in per request, so tests can build an isolated
/// instance instead of sharing a process-wide global.
pub struct Context {
    pub store: Arc<RwLock<Inventory>>,
}

impl juniper::Context for Context {}

impl Context {
    pub fn new(store: Arc<RwLock<Inventory>>) -> Self { Context { store } }

    pub fn read(&self) -> FieldResult<RwLockReadGuard<'_, Inventory>> {
        match self.store.read() {
            Ok(guard) => Ok(guard),
            Err(_) => lock_poisoned(),
        }
    }

    pub fn write(&self) -> FieldResult<RwLockWriteGuard<'_, Inventory>> {
        match self.store.write() {
            Ok(guard) => Ok(guard),
            Err(_) => lock_poisoned(),
        }
    }
}
