use crate::data::{load_current_data, save_data, AudienceData, LoadOutcome};
use crate::scraper::{build_client, scrape_megazap, ScrapedShares, MEGAZAP_URL};
use anyhow::Result;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Runs one load → stamp → scrape → save cycle against a configured
/// document path. The source URL is overridable so tests can point the
/// scrape step at an unreachable host.
pub struct Updater {
    data_file: PathBuf,
    source_url: String,
}

impl Updater {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Updater {
            data_file: data_file.into(),
            source_url: MEGAZAP_URL.to_string(),
        }
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = url.into();
        self
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Run the full update cycle and return the state that was written.
    /// A failed scrape is logged and ignored; a failed save is fatal.
    pub fn update_data(&self) -> Result<AudienceData> {
        info!("Starting audience data update");

        let mut data = match load_current_data(&self.data_file) {
            LoadOutcome::Loaded(data) => data,
            LoadOutcome::UsedDefault { data, reason } => {
                info!("Using default dataset: {}", reason);
                data
            }
        };

        data.last_update = Local::now().format("%Y-%m-%d").to_string();

        match self.scrape_shares() {
            Ok(shares) if !shares.is_empty() => {
                // The mapping from scraped figures back into the stored
                // document (and how the evolution fields would be recomputed)
                // is not settled yet, so the stored figures are kept as-is.
                info!(
                    "Scrape found shares (Radio Free Dom: {:?}, EXO FM: {:?}); keeping stored figures",
                    shares.freedom1_pda, shares.exo_pda
                );
            }
            Ok(_) => info!("Scrape succeeded but matched no share figures"),
            Err(e) => error!("Scraping failed: {:#}", e),
        }

        save_data(&self.data_file, &data)?;
        info!("Audience data saved to {}", self.data_file.display());

        Ok(data)
    }

    fn scrape_shares(&self) -> Result<ScrapedShares> {
        let client = build_client()?;
        scrape_megazap(&client, &self.source_url)
    }
}
