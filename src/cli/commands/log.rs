use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

/// `log` prints the activity log; `--print` is accepted for symmetry with
/// the other commands and `--tail N` limits the output.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print: _, tail } = cmd {
        LogLogic::print_log(&cfg.activity_log_path(), *tail)?;
    }

    Ok(())
}
