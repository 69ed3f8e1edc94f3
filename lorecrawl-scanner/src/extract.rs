//! Pure HTML extraction for the three MediaWiki page shapes the crawler
//! depends on: the browse root page, category pages, and article pages.
//! Everything in here is offline-testable; no I/O.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

static CITATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\d+\]").unwrap());

/// An anchor resolved against the wiki base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub name: String,
    pub url: String,
}

/// The two link regions of a category page. A missing region yields an
/// empty list, not an error.
#[derive(Debug, Default)]
pub struct CategoryListing {
    pub subcategories: Vec<PageLink>,
    pub pages: Vec<PageLink>,
}

/// What an article page turned out to be once fetched.
#[derive(Debug)]
pub enum PageContent {
    /// The page is a redirect notice pointing at another page.
    Redirect(PageLink),
    /// An ordinary article; `summary` is the first non-empty paragraph
    /// with citation markers removed, or empty when the page has none.
    Article { summary: String },
}

/// Extracts the root category links from the wiki's browse page: every
/// anchor whose href sits in the category namespace.
pub fn browse_categories(html: &str, base: &Url) -> Vec<PageLink> {
    let document = Html::parse_document(html);
    let category_selector = Selector::parse(r#"a[href^="/Category:"]"#).unwrap();

    document
        .select(&category_selector)
        .filter_map(|el| link_from(el, base))
        .collect()
}

/// Extracts the subcategory and member-page links of a category page,
/// in document order.
pub fn category_listing(html: &str, base: &Url) -> CategoryListing {
    let document = Html::parse_document(html);
    let subcategories_selector = Selector::parse("#mw-subcategories").unwrap();
    let pages_selector = Selector::parse("#mw-pages").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();

    let mut listing = CategoryListing::default();

    if let Some(region) = document.select(&subcategories_selector).next() {
        listing.subcategories = region
            .select(&anchor_selector)
            .filter_map(|el| link_from(el, base))
            .collect();
    }

    if let Some(region) = document.select(&pages_selector).next() {
        listing.pages = region
            .select(&anchor_selector)
            .filter_map(|el| link_from(el, base))
            .collect();
    }

    listing
}

/// Classifies an article page. Returns `None` when the content region is
/// missing, or when a redirect notice is present without a usable target
/// link; callers treat both as a node to skip.
pub fn page_content(html: &str, base: &Url) -> Option<PageContent> {
    let document = Html::parse_document(html);
    let content_selector = Selector::parse("#mw-content-text").unwrap();
    let redirect_selector = Selector::parse("div.redirectMsg").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();
    let paragraph_selector = Selector::parse("p").unwrap();

    let content = document.select(&content_selector).next()?;

    if content.select(&redirect_selector).next().is_some() {
        let target = content
            .select(&anchor_selector)
            .find_map(|el| link_from(el, base))?;
        return Some(PageContent::Redirect(target));
    }

    let summary = content
        .select(&paragraph_selector)
        .map(|p| visible_text(p))
        .find(|text| !text.is_empty())
        .map(|text| strip_citations(&text))
        .unwrap_or_default();

    Some(PageContent::Article { summary })
}

/// Removes inline numeric citation markers such as `[1]`.
pub fn strip_citations(text: &str) -> String {
    CITATION.replace_all(text, "").into_owned()
}

fn visible_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn link_from(el: ElementRef, base: &Url) -> Option<PageLink> {
    let href = el.value().attr("href")?;
    let name = visible_text(el);
    if name.is_empty() {
        return None;
    }

    let url = base.join(href).ok()?;
    Some(PageLink {
        name,
        url: url.to_string(),
    })
}
