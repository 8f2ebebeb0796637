pub use error::Error;
mod command;
mod conf;
mod error;
mod fence;
mod map;
mod permission;
mod session;
use conf::Conf;
use std::env;
use tracing_subscriber::EnvFilter;

pub type Result<T, E = Error> = std::result::Result<T, E>;

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();

    let command = match args.get(1) {
        Some(some) => some,
        None => Err(Error::Cli("No actions passed".into()))?,
    };

    let conf = Conf::from_env()?;

    match command.as_str() {
        "dump" => command::dump::run(&args[2..], conf)?,
        "render" => command::render::run(&args[2..], conf)?,
        "export" => command::export::run(&args[2..], conf)?,
        "style" => command::style::run(&args[2..])?,
        first_arg => Err(Error::Cli(format!("Unknown command: {first_arg}")))?,
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cfg!(debug_assertions) {
        builder.init();
    } else {
        builder.json().without_time().init();
    }
}
