use mc_config::McConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, config: &McConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Summary => commands::summary::handle(config, flags).await,
        Commands::Explore(args) => commands::explore::handle(&args, config, flags).await,
        Commands::Watch(args) => commands::watch::handle(&args, config, flags).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
