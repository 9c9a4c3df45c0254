// detector.rs
use scraper::{Html, Selector};

/// Tag kinds probed for a keyword, in priority order. Headline-ish tags
/// come first so the listed price wins over a mention buried in body text.
const CANDIDATE_TAGS: [&str; 5] = ["h3", "strong", "span", "p", "div"];

/// Where on the page a field lives: the tag kind plus the full class
/// attribute of the element that carried the keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLocation {
    pub tag: &'static str,
    pub class: String,
}

/// Detail pages have no stable schema, so the element holding a field is
/// rediscovered per page by keyword presence rather than fixed selectors.
pub trait FieldDetector {
    fn detect(&self, document: &Html, keyword: &str) -> Option<FieldLocation>;
}

/// Default detector: walk the candidate tag kinds in priority order and,
/// within each kind, the elements in document order. The first element
/// whose text contains the keyword decides, as long as it carries a class
/// attribute usable for re-selection.
pub struct TagScanDetector;

impl FieldDetector for TagScanDetector {
    fn detect(&self, document: &Html, keyword: &str) -> Option<FieldLocation> {
        for tag in CANDIDATE_TAGS {
            let selector = match Selector::parse(tag) {
                Ok(s) => s,
                Err(_) => continue,
            };
            for element in document.select(&selector) {
                let text: String = element.text().collect();
                if !text.contains(keyword) {
                    continue;
                }
                // A hit without a class attribute cannot be re-selected;
                // skip it and keep scanning.
                if let Some(class) = element.value().attr("class") {
                    return Some(FieldLocation {
                        tag,
                        class: class.to_string(),
                    });
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(html: &str, keyword: &str) -> Option<FieldLocation> {
        let document = Html::parse_document(html);
        TagScanDetector.detect(&document, keyword)
    }

    #[test]
    fn finds_tag_and_class_of_keyword_element() {
        let html = r#"<html><body><span class="offer-price">1.200 €</span></body></html>"#;
        let location = detect(html, "€").expect("should detect the price element");
        assert_eq!(location.tag, "span");
        assert_eq!(location.class, "offer-price");
    }

    #[test]
    fn respects_tag_priority_order() {
        // Both a div and an h3 contain the keyword; h3 ranks higher.
        let html = r#"<html><body>
            <div class="body-text">around 500 €</div>
            <h3 class="headline-price">500 €</h3>
        </body></html>"#;
        let location = detect(html, "€").unwrap();
        assert_eq!(location.tag, "h3");
        assert_eq!(location.class, "headline-price");
    }

    #[test]
    fn skips_matching_element_without_class() {
        let html = r#"<html><body>
            <span>980 €</span>
            <p class="fallback">980 €</p>
        </body></html>"#;
        let location = detect(html, "€").unwrap();
        assert_eq!(location.tag, "p");
        assert_eq!(location.class, "fallback");
    }

    #[test]
    fn reports_nothing_when_keyword_absent() {
        let html = r#"<html><body><div class="x">no currency here</div></body></html>"#;
        assert_eq!(detect(html, "€"), None);
    }

    #[test]
    fn detection_is_idempotent() {
        let html = r#"<html><body>
            <p class="a">700 €</p>
            <div class="b">700 €</div>
        </body></html>"#;
        let document = Html::parse_document(html);
        let first = TagScanDetector.detect(&document, "€");
        let second = TagScanDetector.detect(&document, "€");
        assert_eq!(first, second);
    }

    #[test]
    fn joined_class_attribute_is_kept_whole() {
        let html = r#"<html><body><span class="price bold">300 €</span></body></html>"#;
        let location = detect(html, "€").unwrap();
        assert_eq!(location.class, "price bold");
    }
}
