use anyhow::Result;
use clap::Parser;
use freedom_audience_scraper::Updater;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Refresh the persisted La Réunion radio audience dataset", long_about = None)]
struct Args {
    /// Path of the JSON document to refresh
    #[arg(long, default_value = "data.json")]
    data_file: PathBuf,

    /// Override the article URL the scrape step fetches
    #[arg(long)]
    url: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();

    let mut updater = Updater::new(args.data_file);
    if let Some(url) = args.url {
        updater = updater.with_source_url(url);
    }

    let data = updater.update_data()?;

    println!("Period: {}", data.period);
    println!("Last update: {}", data.last_update);
    println!("Stations ranked: {}", data.rankings.len());
    println!("Document: {}", updater.data_file().display());

    Ok(())
}
