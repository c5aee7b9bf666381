use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::ArtworkStore;
use crate::errors::{AppError, AppResult};
use crate::export::ArtworkExport;
use crate::models::Artwork;
use crate::ui::messages::info;
use crate::utils::format_price;
use crate::utils::formatting::{bold, truncate};
use crate::utils::table::{Column, Table};

const MAX_TEXT_WIDTH: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config, store: &ArtworkStore) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let artworks = store.list_all()?;

        if *json {
            let rows: Vec<ArtworkExport> = artworks.iter().map(ArtworkExport::from).collect();
            let out = serde_json::to_string_pretty(&rows)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{out}");
            return Ok(());
        }

        if artworks.is_empty() {
            info("No artworks in the collection.");
            return Ok(());
        }

        println!("{}\n", bold("Collection:"));
        print!("{}", render_table(&artworks, cfg));
        println!("\nTotal: {}", artworks.len());
    }
    Ok(())
}

pub fn render_table(artworks: &[Artwork], cfg: &Config) -> String {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("Title"),
        Column::new("Artist"),
        Column::new("Year"),
        Column::new("Style"),
        Column::new(format!("Price ({})", cfg.currency)),
        Column::new("Added"),
    ])
    .with_separator(cfg.separator());

    for a in artworks {
        table.add_row(vec![
            a.id.map(|id| id.to_string()).unwrap_or_default(),
            truncate(&a.title, MAX_TEXT_WIDTH),
            truncate(&a.artist, MAX_TEXT_WIDTH),
            a.year.to_string(),
            truncate(&a.style, MAX_TEXT_WIDTH),
            format_price(a.price),
            a.created_at.clone(),
        ]);
    }

    table.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shows_formatted_price_and_currency() {
        let mut a = Artwork::new("Starry Night", "Van Gogh", 1889, "Post-Impressionism", 1e8);
        a.id = Some(1);
        a.created_at = "01.02.2025 10:00".into();

        let out = render_table(&[a], &Config::default());
        assert!(out.starts_with("ID Title"));
        assert!(out.contains("Price (€)"));
        assert!(out.contains("100,000,000.00"));
        assert!(out.contains("01.02.2025 10:00"));
    }
}
