// crawler.rs
use crate::harvester::HarvestError;
use reqwest::blocking::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

/// Crawls paginated search-result pages and collects detail-page links.
/// Index requests go out with the default client headers; only detail
/// fetches masquerade as a browser.
pub struct PageCrawler {
    client: Client,
    anchor: Selector,
}

impl PageCrawler {
    pub fn new() -> Result<Self, HarvestError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| HarvestError::Network(e.to_string()))?;

        let anchor =
            Selector::parse("a[href]").map_err(|e| HarvestError::HtmlParse(e.to_string()))?;

        Ok(Self { client, anchor })
    }

    /// Walks `base_url?page=1..=num_pages` and collects every hyperlink
    /// whose target contains `marker`. A page that fails to fetch is logged
    /// and contributes zero links; the crawl moves on. Duplicates are kept,
    /// callers deduplicate before extraction.
    pub fn collect_listing_urls(
        &self,
        base_url: &str,
        num_pages: u32,
        marker: &str,
    ) -> Result<Vec<String>, HarvestError> {
        let base = Url::parse(base_url)
            .map_err(|e| HarvestError::InvalidUrl(format!("{base_url}: {e}")))?;

        let mut urls = Vec::new();
        for page in 1..=num_pages {
            let page_url = format!("{base_url}?page={page}");
            eprintln!("📄 Scraping page {page}...");

            match self.client.get(&page_url).send() {
                Ok(response) if response.status().is_success() => match response.text() {
                    Ok(body) => urls.extend(self.links_in_page(&body, &base, marker)),
                    Err(e) => eprintln!("⚠️ Failed to read page {page}: {e}"),
                },
                Ok(response) => {
                    eprintln!("⚠️ Failed to retrieve page {page}: HTTP {}", response.status())
                }
                Err(e) => eprintln!("⚠️ Failed to retrieve page {page}: {e}"),
            }
        }

        Ok(urls)
    }

    /// Pulls the matching hrefs out of one result page. Relative links are
    /// resolved against the crawl base so downstream fetches always see
    /// absolute URLs.
    fn links_in_page(&self, html: &str, base: &Url, marker: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let mut links = Vec::new();

        for element in document.select(&self.anchor) {
            let href = match element.value().attr("href") {
                Some(h) => h,
                None => continue,
            };
            if !href.contains(marker) {
                continue;
            }
            if let Ok(resolved) = base.join(href) {
                links.push(resolved.to_string());
            }
        }

        links
    }
}
