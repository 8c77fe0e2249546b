//! Feed item extraction for the latest-news listing page.
//!
//! The listing page is a flat feed of article previews. Each preview lives in
//! a `div.bastian-feed-item` block:
//!
//! ```text
//! div.bastian-feed-item
//! ├── a.feed-post-link[href]          -> title (text) and link (href)
//! ├── div.feed-post-body-resumo       -> description (text)
//! └── img.bstn-fd-picture-image[src]  -> image (src)
//! ```
//!
//! Further pages are reached through the "load more" control,
//! `div.load-more.gui-color-primary-bg`, whose inner link points at the next
//! page of the feed.
//!
//! Lookups return `Option`s: a block that lacks any required sub-element is
//! not an error, it just yields no record. A sub-element that is present but
//! lacks the attribute carrying its value (`href`, `src`) is unexpected markup
//! and fails the collection.

use crate::error::CollectError;
use crate::models::ArticleRecord;
use scraper::{ElementRef, Html, Selector};

const FEED_ITEM: &str = "div.bastian-feed-item";
const POST_LINK: &str = "a.feed-post-link";
const POST_SUMMARY: &str = "div.feed-post-body-resumo";
const POST_IMAGE: &str = "img.bstn-fd-picture-image";
const LOAD_MORE: &str = "div.load-more.gui-color-primary-bg";
const LOAD_MORE_LINK: &str = "a";

/// Compiled selectors for every element the collector looks for.
#[derive(Debug)]
pub struct FeedSelectors {
    item: Selector,
    link: Selector,
    summary: Selector,
    image: Selector,
    load_more: Selector,
    load_more_link: Selector,
}

impl FeedSelectors {
    /// Compile all selectors.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Collection`] if a selector does not parse.
    pub fn new() -> Result<Self, CollectError> {
        Ok(Self {
            item: compile(FEED_ITEM)?,
            link: compile(POST_LINK)?,
            summary: compile(POST_SUMMARY)?,
            image: compile(POST_IMAGE)?,
            load_more: compile(LOAD_MORE)?,
            load_more_link: compile(LOAD_MORE_LINK)?,
        })
    }
}

fn compile(css: &str) -> Result<Selector, CollectError> {
    Selector::parse(css).map_err(|e| CollectError::Collection {
        reason: format!("invalid selector `{css}`: {e}"),
    })
}

/// Typed view over a single feed item block.
pub struct FeedItem<'a> {
    element: ElementRef<'a>,
}

impl<'a> FeedItem<'a> {
    pub fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// First descendant matching `selector`.
    pub fn find(&self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.element.select(selector).next()
    }

    /// Build a record from this block.
    ///
    /// `Ok(None)` if any of the four sub-elements is absent.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Collection`] when the link or image element is
    /// present but lacks its `href` / `src` attribute.
    pub fn extract(&self, selectors: &FeedSelectors) -> Result<Option<ArticleRecord>, CollectError> {
        let (Some(link_el), Some(summary_el), Some(image_el)) = (
            self.find(&selectors.link),
            self.find(&selectors.summary),
            self.find(&selectors.image),
        ) else {
            return Ok(None);
        };

        Ok(Some(ArticleRecord {
            title: normalized_text(link_el),
            description: normalized_text(summary_el),
            link: required_attr(link_el, "href")?,
            image: required_attr(image_el, "src")?,
        }))
    }
}

fn required_attr(element: ElementRef<'_>, attr: &str) -> Result<String, CollectError> {
    element
        .value()
        .attr(attr)
        .map(str::to_string)
        .ok_or_else(|| CollectError::Collection {
            reason: format!("<{}> element has no `{attr}` attribute", element.value().name()),
        })
}

/// Every text node under `element`, trimmed, empty ones dropped, joined by a
/// single space.
pub fn normalized_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Result of scanning one listing page.
///
/// Extraction errors are kept per entry so that the collector only fails on
/// blocks (and the continuation link) it actually consumes.
#[derive(Debug)]
pub struct PageScan {
    /// One entry per feed item block, in document order. `Ok(None)` marks a
    /// block that was missing a required element.
    pub items: Vec<Result<Option<ArticleRecord>, CollectError>>,
    /// Target of the "load more" link, `Ok(None)` if the page has none.
    pub next_page: Result<Option<String>, CollectError>,
}

/// Parse `html` and extract every feed item plus the continuation link.
pub fn scan_page(html: &str, selectors: &FeedSelectors) -> PageScan {
    let document = Html::parse_document(html);

    let items = document
        .select(&selectors.item)
        .map(|element| FeedItem::new(element).extract(selectors))
        .collect();

    // First control only, and its first link.
    let next_page = match document
        .select(&selectors.load_more)
        .next()
        .and_then(|control| control.select(&selectors.load_more_link).next())
    {
        Some(a) => required_attr(a, "href").map(Some),
        None => Ok(None),
    };

    PageScan { items, next_page }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors() -> FeedSelectors {
        FeedSelectors::new().unwrap()
    }

    /// Items of a page where every block is expected to extract cleanly.
    fn items(html: &str) -> Vec<Option<ArticleRecord>> {
        scan_page(html, &selectors())
            .items
            .into_iter()
            .map(Result::unwrap)
            .collect()
    }

    fn next_page(html: &str) -> Result<Option<String>, CollectError> {
        scan_page(html, &selectors()).next_page
    }

    #[test]
    fn test_selectors_compile() {
        assert!(FeedSelectors::new().is_ok());
    }

    #[test]
    fn test_scan_page_extracts_complete_block() {
        let html = r#"
            <div class="bastian-feed-item">
              <a class="feed-post-link" href="https://g1.globo.com/a.ghtml"><p>Headline</p></a>
              <div class="feed-post-body-resumo">Short summary</div>
              <img class="bstn-fd-picture-image" src="https://s2.glbimg.com/a.jpg">
            </div>
        "#;

        assert_eq!(
            items(html),
            vec![Some(ArticleRecord {
                title: "Headline".to_string(),
                description: "Short summary".to_string(),
                link: "https://g1.globo.com/a.ghtml".to_string(),
                image: "https://s2.glbimg.com/a.jpg".to_string(),
            })]
        );
        assert_eq!(next_page(html).unwrap(), None);
    }

    #[test]
    fn test_text_is_normalized_across_nested_nodes() {
        let html = r#"
            <div class="bastian-feed-item">
              <a class="feed-post-link" href="/a">
                  Breaking:
                  <span>  market   </span>
                  <b></b>
                  closes
              </a>
              <div class="feed-post-body-resumo">
                 line one
                 <br>
                 line two
              </div>
              <img class="bstn-fd-picture-image" src="/a.jpg">
            </div>
        "#;

        let record = items(html).remove(0).unwrap();
        assert_eq!(record.title, "Breaking: market closes");
        assert_eq!(record.description, "line one line two");
    }

    #[test]
    fn test_link_and_image_are_kept_verbatim() {
        let html = r#"
            <div class="bastian-feed-item">
              <a class="feed-post-link" href="../relative/path?x=1">T</a>
              <div class="feed-post-body-resumo">D</div>
              <img class="bstn-fd-picture-image" src="//cdn.example.com/i.png">
            </div>
        "#;

        let record = items(html).remove(0).unwrap();
        assert_eq!(record.link, "../relative/path?x=1");
        assert_eq!(record.image, "//cdn.example.com/i.png");
    }

    #[test]
    fn test_block_missing_element_yields_none() {
        let html = r#"
            <div class="bastian-feed-item">
              <a class="feed-post-link" href="/a">No image</a>
              <div class="feed-post-body-resumo">D</div>
            </div>
            <div class="bastian-feed-item">
              <a class="feed-post-link" href="/b">No summary</a>
              <img class="bstn-fd-picture-image" src="/b.jpg">
            </div>
            <div class="bastian-feed-item">
              <div class="feed-post-body-resumo">No link</div>
              <img class="bstn-fd-picture-image" src="/c.jpg">
            </div>
        "#;

        assert_eq!(items(html), vec![None, None, None]);
    }

    #[test]
    fn test_missing_element_wins_over_missing_attribute() {
        // No summary, so the block is skipped before the bare link is read.
        let html = r#"
            <div class="bastian-feed-item">
              <a class="feed-post-link">No href</a>
              <img class="bstn-fd-picture-image" src="/a.jpg">
            </div>
        "#;

        assert_eq!(items(html), vec![None]);
    }

    #[test]
    fn test_link_without_href_is_collection_failure() {
        let html = r#"
            <div class="bastian-feed-item">
              <a class="feed-post-link">No href</a>
              <div class="feed-post-body-resumo">D</div>
              <img class="bstn-fd-picture-image" src="/a.jpg">
            </div>
        "#;

        let scan = scan_page(html, &selectors());
        let err = scan.items.into_iter().next().unwrap().unwrap_err();
        assert!(matches!(&err, CollectError::Collection { reason } if reason.contains("href")));
    }

    #[test]
    fn test_image_without_src_is_collection_failure() {
        let html = r#"
            <div class="bastian-feed-item">
              <a class="feed-post-link" href="/b">No src</a>
              <div class="feed-post-body-resumo">D</div>
              <img class="bstn-fd-picture-image">
            </div>
        "#;

        let scan = scan_page(html, &selectors());
        let err = scan.items.into_iter().next().unwrap().unwrap_err();
        assert!(matches!(&err, CollectError::Collection { reason } if reason.contains("src")));
    }

    #[test]
    fn test_bad_block_does_not_taint_its_neighbours() {
        let html = r#"
            <div class="bastian-feed-item">
              <a class="feed-post-link" href="/a">Good</a>
              <div class="feed-post-body-resumo">D</div>
              <img class="bstn-fd-picture-image" src="/a.jpg">
            </div>
            <div class="bastian-feed-item">
              <a class="feed-post-link">Bad</a>
              <div class="feed-post-body-resumo">D</div>
              <img class="bstn-fd-picture-image" src="/b.jpg">
            </div>
        "#;

        let scan = scan_page(html, &selectors());
        assert_eq!(scan.items.len(), 2);
        assert!(matches!(&scan.items[0], Ok(Some(r)) if r.title == "Good"));
        assert!(scan.items[1].is_err());
    }

    #[test]
    fn test_items_keep_document_order() {
        let block = |n: u32| {
            format!(
                r#"<div class="bastian-feed-item">
                     <a class="feed-post-link" href="/{n}">Title {n}</a>
                     <div class="feed-post-body-resumo">D</div>
                     <img class="bstn-fd-picture-image" src="/{n}.jpg">
                   </div>"#
            )
        };
        let html = format!("{}{}{}", block(1), block(2), block(3));

        let titles: Vec<String> = items(&html).into_iter().flatten().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Title 1", "Title 2", "Title 3"]);
    }

    #[test]
    fn test_load_more_link_is_found() {
        let html = r#"
            <div class="load-more gui-color-primary-bg">
              <a href="https://g1.globo.com/ultimas-noticias/index/feed/pagina-2.ghtml">Veja mais</a>
            </div>
        "#;

        let scan = scan_page(html, &selectors());
        assert!(scan.items.is_empty());
        assert_eq!(
            scan.next_page.unwrap().as_deref(),
            Some("https://g1.globo.com/ultimas-noticias/index/feed/pagina-2.ghtml")
        );
    }

    #[test]
    fn test_load_more_without_anchor_ends_pagination() {
        let html = r#"<div class="load-more gui-color-primary-bg"><span>Veja mais</span></div>"#;
        assert_eq!(next_page(html).unwrap(), None);
    }

    #[test]
    fn test_load_more_anchor_without_href_is_collection_failure() {
        let html = r#"
            <div class="load-more gui-color-primary-bg">
              <a>Veja mais</a>
              <a href="/page-2">x</a>
            </div>
        "#;

        let err = next_page(html).unwrap_err();
        assert!(matches!(&err, CollectError::Collection { reason } if reason.contains("href")));
    }

    #[test]
    fn test_only_first_load_more_control_is_used() {
        let html = r#"
            <div class="load-more gui-color-primary-bg"><span>Veja mais</span></div>
            <div class="load-more gui-color-primary-bg"><a href="/page-2">Veja mais</a></div>
        "#;
        assert_eq!(next_page(html).unwrap(), None);
    }

    #[test]
    fn test_load_more_needs_both_classes() {
        let html = r#"<div class="load-more"><a href="/page-2">Veja mais</a></div>"#;
        assert_eq!(next_page(html).unwrap(), None);
    }
}
