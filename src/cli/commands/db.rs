use crate::cli::parser::Commands;
use crate::db::ArtworkStore;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, store: &ArtworkStore) -> AppResult<()> {
    if let Commands::Db {
        info,
        check,
        vacuum,
    } = cmd
    {
        // no flag → info
        let show_info = *info || !(*check || *vacuum);

        if show_info {
            let s = stats::collect(store)?;
            stats::print_db_info(&s);
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);
            let integrity = stats::integrity_check(store)?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            stats::vacuum(store)?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
