use std::sync::{Arc, RwLock};

use actix_cors::Cors;
use actix_web::{web, Error, HttpRequest, HttpResponse, HttpServer};
use juniper_actix::{graphiql_handler, graphql_handler};

use store::Inventory;

use crate::graphql_schemas::{create_schema, Context, Schema};
use crate::settings::Settings;

async fn graphql(
    req: HttpRequest,
    payload: web::Payload,
    schema: web::Data<Schema>,
    store: web::Data<RwLock<Inventory>>,
) -> Result<HttpResponse, Error> {
    let context = Context::new(store.into_inner());
    graphql_handler(&schema, &context, req, payload).await
}

async fn graphiql() -> Result<HttpResponse, Error> { graphiql_handler("/graphql", None).await }

pub fn config_app(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(|| async { HttpResponse::Ok().finish() })));
    cfg.service(
        web::resource("/graphql")
            .route(web::get().to(graphql))
            .route(web::post().to(graphql)),
    );
    cfg.service(web::resource("/graphiql").route(web::get().to(graphiql)));
}

pub async fn httpserver(store: Arc<RwLock<Inventory>>, port: u16) -> std::io::Result<()> {
    let app = move || {
        actix_web::App::new()
            .app_data(web::Data::from(store.clone()))
            .app_data(web::Data::new(create_schema()))
            .wrap(Cors::permissive())
            .configure(config_app)
    };
    debug!("Starting api server on {} ...", port);
    HttpServer::new(app).bind(format!("localhost:{}", port))?.run().await
}

/// Seeds the store from the settings and serves it until interrupted.
pub async fn start(settings: Arc<RwLock<Settings>>) -> std::io::Result<()> {
    let (seed, port) = {
        let settings = settings.read().unwrap();
        (settings.seed.clone(), settings.api.port.0)
    };
    let store = Arc::new(RwLock::new(Inventory::from_seed(seed)));
    {
        let store = store.read().unwrap();
        info!(
            "Seeded store with {} teams, {} equipments, {} supplies",
            store.teams().len(),
            store.equipments().len(),
            store.supplies().len()
        );
    }
    httpserver(store, port).await
}
