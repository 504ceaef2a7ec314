use std::future::Future;
use std::process;
use std::sync::{Arc, RwLock};

use structopt::StructOpt;

use crate::settings::{self, Settings};

#[derive(StructOpt, Debug)]
#[structopt(name = "quartermaster")]
struct CliOptions {
    /// Parse and print the configuration, then exit
    #[structopt(long)]
    check_conf: bool,
    /// Configuration environment, resolves to config/{env}.yaml
    #[structopt(short, long)]
    config: String,
    #[structopt(short, long)]
    version: bool,
}

pub async fn with_config<F, T>(system_fn: F) -> anyhow::Result<()>
where
    F: FnOnce(Arc<RwLock<Settings>>) -> T,
    T: Future<Output = std::io::Result<()>> + 'static,
{
    let opts: CliOptions = CliOptions::from_args();
    if opts.version {
        println!("Build Version: {}", env!("CARGO_PKG_VERSION"));
        process::exit(0x0100);
    }

    env_logger::init();

    let settings = Arc::new(RwLock::new(settings::Settings::new(opts.config)?));

    if opts.check_conf {
        println!("{:#?}", settings.read().unwrap());
        process::exit(0x0100);
    }

    if let Err(e) = system_fn(settings).await {
        error!("Quartermaster exited in error: {:?}", e);
    }
    info!("Stopped the api server");
    Ok(())
}
