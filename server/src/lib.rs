#![deny(unused_must_use, unused_mut)]

#[macro_use]
extern crate juniper;
#[macro_use]
extern crate log;

pub mod graphql_schemas;
pub mod runner;
pub mod server;
pub mod settings;
