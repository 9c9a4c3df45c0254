mod crawler;
mod detector;
mod extractor;
mod harvester_error;
mod models;

pub use crawler::PageCrawler;
pub use detector::{FieldDetector, FieldLocation, TagScanDetector};
pub use extractor::{harvest_listings, ListingExtractor};
pub use harvester_error::HarvestError;
pub use models::{ListingRecord, NOT_FOUND};
