// extractor.rs
use crate::harvester::{FieldDetector, HarvestError, ListingRecord, TagScanDetector};
use regex::Regex;
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

const PRICE_KEYWORD: &str = "€";
const SIZE_MARKER: &str = "m²";
const ROOMS_MARKER: &str = "camere";

/// Pause between detail fetches to stay under the site's rate limits.
const FETCH_DELAY: Duration = Duration::from_secs(2);

/// Fetches detail pages and pulls price, size and room count out of them
/// by keyword-guided scanning.
pub struct ListingExtractor {
    client: Client,
    detector: Box<dyn FieldDetector>,
    digit_run: Regex,
    size_value: Regex,
    rooms_value: Regex,
    containers: Selector,
}

impl ListingExtractor {
    pub fn new() -> Result<Self, HarvestError> {
        Self::with_detector(Box::new(TagScanDetector))
    }

    pub fn with_detector(detector: Box<dyn FieldDetector>) -> Result<Self, HarvestError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| HarvestError::Network(e.to_string()))?;

        let pattern = |p: &str| Regex::new(p).map_err(|e| HarvestError::Pattern(e.to_string()));

        Ok(Self {
            client,
            detector,
            digit_run: pattern(r"\d+")?,
            size_value: pattern(r"(\d+)m²")?,
            rooms_value: pattern(r"(\d+)camere")?,
            containers: Selector::parse("div")
                .map_err(|e| HarvestError::HtmlParse(e.to_string()))?,
        })
    }

    /// Fetches one detail page and extracts its record. A failed fetch or a
    /// page without a room count yields no record at all; a missing price
    /// or size only degrades to a sentinel in the output.
    pub fn extract(&self, url: &str) -> Option<ListingRecord> {
        let response = match self.client.get(url).send() {
            Ok(r) => r,
            Err(e) => {
                eprintln!("⚠️ Failed to retrieve {url}: {e}");
                return None;
            }
        };

        if !response.status().is_success() {
            eprintln!("⚠️ Failed to retrieve {url}: HTTP {}", response.status());
            return None;
        }

        let body = match response.text() {
            Ok(b) => b,
            Err(e) => {
                eprintln!("⚠️ Failed to read {url}: {e}");
                return None;
            }
        };

        self.extract_from_html(&body)
    }

    /// Extraction split off from the fetch so it can run against saved
    /// fixture pages.
    pub fn extract_from_html(&self, html: &str) -> Option<ListingRecord> {
        let document = Html::parse_document(html);

        let price = self.detect_price(&document);
        let size = self.value_before_marker(&document, SIZE_MARKER, &self.size_value);

        // Hard rule: no room count anywhere on the page, no record.
        let rooms = self.value_before_marker(&document, ROOMS_MARKER, &self.rooms_value)?;

        Some(ListingRecord { price, size, rooms })
    }

    /// Locates the price element via the detector, then takes the first
    /// digit run of its text after stripping thousand-separator periods.
    fn detect_price(&self, document: &Html) -> Option<String> {
        let location = self.detector.detect(document, PRICE_KEYWORD)?;
        let selector = Selector::parse(location.tag).ok()?;

        let element = document
            .select(&selector)
            .find(|e| e.value().attr("class") == Some(location.class.as_str()))?;

        let text = element.text().collect::<String>().replace('.', "");
        self.digit_run.find(&text).map(|m| m.as_str().to_string())
    }

    /// Scans `<div>` containers in document order; the first whose
    /// space-stripped text contains `marker` decides the value, and the
    /// scan stops there even when that container holds no digit run.
    fn value_before_marker(
        &self,
        document: &Html,
        marker: &str,
        pattern: &Regex,
    ) -> Option<String> {
        for element in document.select(&self.containers) {
            let text = element.text().collect::<String>().replace(' ', "");
            if text.contains(marker) {
                return pattern.captures(&text).map(|c| c[1].to_string());
            }
        }
        None
    }
}

/// Visits each URL sequentially and accumulates the records that survived
/// extraction. URLs are deduplicated up front, first occurrence wins; a
/// fixed delay separates requests.
pub fn harvest_listings(extractor: &ListingExtractor, urls: &[String]) -> Vec<ListingRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for url in urls {
        if !seen.insert(url.as_str()) {
            continue;
        }
        eprintln!("📄 Scraping data from {url}...");

        if let Some(record) = extractor.extract(url) {
            records.push(record);
        }
        std::thread::sleep(FETCH_DELAY);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Option<ListingRecord> {
        ListingExtractor::new().unwrap().extract_from_html(html)
    }

    #[test]
    fn full_page_yields_complete_record() {
        let html = r#"<html><body>
            <h3 class="amount">500 €</h3>
            <div class="details">45m²</div>
            <div class="details">2 camere</div>
        </body></html>"#;

        let record = extract(html).expect("page has a room count");
        assert_eq!(record.price.as_deref(), Some("500"));
        assert_eq!(record.size.as_deref(), Some("45"));
        assert_eq!(record.rooms, "2");
    }

    #[test]
    fn page_without_rooms_marker_is_discarded() {
        let html = r#"<html><body>
            <h3 class="amount">500 €</h3>
            <div class="details">45m²</div>
        </body></html>"#;

        assert_eq!(extract(html), None);
    }

    #[test]
    fn missing_price_and_size_degrade_to_sentinels() {
        let html = r#"<html><body><div>3 camere</div></body></html>"#;

        let record = extract(html).unwrap();
        assert_eq!(record.price, None);
        assert_eq!(record.size, None);
        assert_eq!(record.rooms, "3");
    }

    #[test]
    fn size_digit_run_is_read_before_the_marker() {
        let html = r#"<html><body>
            <div>50m²</div>
            <div>2 camere</div>
        </body></html>"#;

        let record = extract(html).unwrap();
        assert_eq!(record.size.as_deref(), Some("50"));
    }

    #[test]
    fn rooms_match_survives_spaces_in_text() {
        let html = r#"<html><body><div>Apartament cu 3 camere</div></body></html>"#;

        let record = extract(html).unwrap();
        assert_eq!(record.rooms, "3");
    }

    #[test]
    fn thousand_separator_is_stripped_from_price() {
        let html = r#"<html><body>
            <span class="price">1.200 €</span>
            <div>4 camere</div>
        </body></html>"#;

        let record = extract(html).unwrap();
        assert_eq!(record.price.as_deref(), Some("1200"));
    }

    #[test]
    fn first_container_with_marker_decides_even_without_digits() {
        // The first div mentions the size unit without a number in front;
        // the scan stops there instead of falling through to the second.
        let html = r#"<html><body>
            <div>Suprafata de m² necunoscuta</div>
            <div>80m²</div>
            <div>2 camere</div>
        </body></html>"#;

        let record = extract(html).unwrap();
        assert_eq!(record.size, None);
        assert_eq!(record.rooms, "2");
    }

    #[test]
    fn price_detected_through_detector_location() {
        // Two spans with the currency; only the first carries a class and
        // should be the one re-selected.
        let html = r#"<html><body>
            <span>999 €</span>
            <span class="amount">750 €</span>
            <div>1 camere</div>
        </body></html>"#;

        let record = extract(html).unwrap();
        assert_eq!(record.price.as_deref(), Some("750"));
    }
}
