use crate::prelude::{println, *};
use clap::Parser;

mod error;
mod fetch;
mod finder;
mod pager;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "List the San Francisco food trucks that are open right now, sorted by name"
)]
pub struct App {
    #[clap(flatten)]
    options: crate::finder::FinderOptions,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "FOODTRUCKS_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    if let Err(err) = crate::finder::run(app.options, app.global).await {
        log::debug!("{err:?}");
        println!("{}", crate::finder::failure_message(&err));
        std::process::exit(1);
    }

    Ok(())
}
