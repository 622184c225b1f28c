// Export the persisted-document and scraping modules
pub mod data;
pub mod scraper;
pub mod updater;

// Re-export tests for integration testing
#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::data::{
    default_audience_data, load_current_data, save_data, AudienceData, LoadOutcome, RankingEntry,
    Show, SourceCitation, StationFigures,
};
pub use crate::scraper::{
    build_client, extract_audience_shares, fetch_html, scrape_megazap, ScrapedShares, MEGAZAP_URL,
};
pub use crate::updater::Updater;
