use anyhow::{Context, Result};
use regex::Regex;
use reqwest::blocking::Client;
use scraper::Html;
use std::time::Duration;

/// Megazap article covering the latest Métridom radio wave for La Réunion.
pub const MEGAZAP_URL: &str = "https://www.megazap.fr/Audiences-TV-Radio-a-La-Reunion-Antenne-Reunion-conforte-son-leadership-Radio-Free-Dom-reste-en-tete-malgre-un-recul_a15503.html";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Market-share percentages extracted from the article text, when found.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScrapedShares {
    pub freedom1_pda: Option<f64>,
    pub exo_pda: Option<f64>,
}

impl ScrapedShares {
    pub fn is_empty(&self) -> bool {
        self.freedom1_pda.is_none() && self.exo_pda.is_none()
    }
}

pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(FETCH_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")
}

pub fn fetch_html(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().context("Failed to send request")?;
    response.text().context("Failed to get response text")
}

/// Flatten the page to plain text and search for the share figures of the
/// primary station and its named competitor. Figures use a decimal comma or
/// point ("33,5%" / "33.5%").
pub fn extract_audience_shares(html: &str) -> Result<ScrapedShares> {
    let document = Html::parse_document(html);
    let content: String = document.root_element().text().collect();

    let freedom_pattern = Regex::new(r"Radio Free Dom[^\d]*(\d+[.,]\d+)%")?;
    let exo_pattern = Regex::new(r"EXO FM[^\d]*(\d+[.,]\d+)%")?;

    Ok(ScrapedShares {
        freedom1_pda: capture_percentage(&freedom_pattern, &content),
        exo_pda: capture_percentage(&exo_pattern, &content),
    })
}

fn capture_percentage(pattern: &Regex, content: &str) -> Option<f64> {
    pattern
        .captures(content)?
        .get(1)
        .and_then(|m| m.as_str().replace(',', ".").parse::<f64>().ok())
}

/// Fetch the article and extract the share figures. Network, timeout and
/// parse errors surface as `Err`; the caller decides whether they abort.
pub fn scrape_megazap(client: &Client, url: &str) -> Result<ScrapedShares> {
    let html = fetch_html(client, url)?;
    extract_audience_shares(&html)
}
