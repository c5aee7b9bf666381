use crate::cli::commands::add::warn_activity_failure;
use crate::cli::parser::Commands;
use crate::db::ArtworkStore;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, store: &ArtworkStore) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let id = *id;

        match store.get(id)? {
            Some(artwork) => {
                let prompt = format!(
                    "Delete artwork #{} \"{}\"? This action is irreversible.",
                    id, artwork.title
                );

                if !*yes && !confirm(&prompt) {
                    info("Operation cancelled.");
                    return Ok(());
                }

                store.delete(id)?;
                success(format!("Artwork #{} \"{}\" has been deleted.", id, artwork.title));
                warn_activity_failure(store);
            }
            None => {
                // unknown ids are not an error
                store.delete(id)?;
                info(format!("No artwork with ID {id}; nothing to delete."));
                warn_activity_failure(store);
            }
        }
    }

    Ok(())
}
