use anyhow::{Context, Result};
use freedom_audience_scraper::{build_client, extract_audience_shares, fetch_html};
use std::env;
use std::fs;
use std::path::Path;

fn main() -> Result<()> {
    // Get URL from command line arguments
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Please provide a URL and a test name");
        eprintln!("Usage: cargo run --bin save_scrape_failure <URL> <test_name>");
        std::process::exit(1);
    }

    let url = &args[1];
    let test_name = &args[2];

    println!("Fetching HTML from {}...", url);

    let client = build_client()?;
    let html = fetch_html(&client, url)?;

    // Create failures directory if it doesn't exist
    let failures_dir = Path::new("src/tests/fixtures/failures");
    fs::create_dir_all(failures_dir).context("Failed to create failures directory")?;

    // Save the HTML for testing
    let file_path = failures_dir.join(format!("{}.html", test_name));
    fs::write(&file_path, &html).context("Failed to write HTML file")?;

    println!(
        "Saved HTML to {} for regression testing",
        file_path.display()
    );

    // Run the extractor against the saved page to confirm the failure
    println!("\nChecking which audience patterns match:");
    let shares = extract_audience_shares(&html)?;
    println!("  - Radio Free Dom share: {:?}", shares.freedom1_pda);
    println!("  - EXO FM share: {:?}", shares.exo_pda);

    if shares.is_empty() {
        println!("✅ Neither pattern matched; saved as a regression case.");
    } else {
        println!("⚠️ At least one pattern matched! This may not be a failure case.");
    }

    Ok(())
}
