extern crate quartermaster;

#[actix_rt::main]
async fn main() -> anyhow::Result<()> {
    quartermaster::runner::with_config(quartermaster::server::start).await
}
