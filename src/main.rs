use crate::analysis::summarize;
use crate::harvester::{harvest_listings, ListingExtractor, PageCrawler};
use crate::tables::csv_store;
use std::error::Error;
use std::path::Path;

mod analysis;
mod harvester;
mod tables;

// Scrape parameters are inline constants; the only runtime input is the
// stage word, which exists so harvest and analyze can run independently.
const BASE_URL: &str =
    "https://www.olx.ro/imobiliare/apartamente-garsoniere-de-inchiriat/cluj-napoca/";
const NUM_PAGES: u32 = 10;
const DETAIL_MARKER: &str = "storia";
const OUTPUT_CSV: &str = "olx_rentals.csv";

fn main() {
    let stage = std::env::args().nth(1);

    let result = match stage.as_deref() {
        Some("harvest") => run_harvest(),
        Some("analyze") => run_analyze(),
        None => run_harvest().and_then(|_| run_analyze()),
        Some(other) => {
            eprintln!("Unknown stage '{other}' (expected 'harvest' or 'analyze')");
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

/// Stage 1: crawl the result pages, extract each detail page, persist the
/// table.
fn run_harvest() -> Result<(), Box<dyn Error>> {
    let crawler = PageCrawler::new()?;
    let urls = crawler.collect_listing_urls(BASE_URL, NUM_PAGES, DETAIL_MARKER)?;
    eprintln!("✅ Collected {} candidate links", urls.len());

    let extractor = ListingExtractor::new()?;
    let records = harvest_listings(&extractor, &urls);
    eprintln!("✅ Extracted {} listings", records.len());

    csv_store::write_records(Path::new(OUTPUT_CSV), &records)?;
    eprintln!("🏁 Saved table to {OUTPUT_CSV}");
    Ok(())
}

/// Stage 2: load the persisted table and print descriptive statistics.
fn run_analyze() -> Result<(), Box<dyn Error>> {
    let records = csv_store::read_records(Path::new(OUTPUT_CSV))?;
    print!("{}", summarize(&records));
    Ok(())
}
