use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::ArtworkStore;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the SQLite database and the `artworks` table
pub fn handle(cli: &Cli, cfg: &Config, store: &ArtworkStore) -> AppResult<()> {
    println!("⚙️  Initializing rGallery…");

    if !cli.test {
        let path = Config::config_file();
        cfg.save_to(&path)?;
        println!("📄 Config file : {}", path.display());
    }

    println!("🗄️  Database    : {}", store.path().display());
    println!("📜 Activity log: {}", cfg.activity_log_path().display());

    store.initialize()?;

    println!("✅ Database initialized at {}", store.path().display());
    println!("🎉 rGallery initialization completed!");
    Ok(())
}
