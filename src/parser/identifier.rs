use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

/// Present in the final URL when the search stayed on the results listing
const SEARCH_MARKER: &str = "index.php";

static LISTING_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/level/1/film/(\d+)/sr/1/").unwrap());
static DETAIL_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//www\.kinopoisk\.ru/film/(\d+)").unwrap());
static MOST_WANTED: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.element.most_wanted").unwrap());
static NAME_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p.name a").unwrap());

#[derive(Debug, thiserror::Error)]
enum IdentifierError {
    #[error("element {0} not found")]
    MissingElement(&'static str),

    #[error("result link has no href")]
    MissingHref,

    #[error("no film id in {0}")]
    PatternNotFound(String),
}

/// Recover the catalog identifier from a search response.
///
/// A search that stayed on `index.php` produced a listing and the best
/// match is read from the page; otherwise the catalog redirected straight
/// to the film page and the id is in `final_url`.
pub fn resolve_identifier(html: &str, final_url: &str) -> Option<String> {
    let result = if final_url.contains(SEARCH_MARKER) {
        from_listing(html)
    } else {
        capture_id(&DETAIL_URL_RE, final_url)
    };

    match result {
        Ok(id) if id.is_empty() => None,
        Ok(id) => Some(id),
        Err(e) => {
            tracing::error!("Cannot resolve film id from {}: {}", final_url, e);
            None
        }
    }
}

fn from_listing(html: &str) -> Result<String, IdentifierError> {
    let document = Html::parse_document(html);
    let element = document
        .select(&MOST_WANTED)
        .next()
        .ok_or(IdentifierError::MissingElement("div.element.most_wanted"))?;
    let link = element
        .select(&NAME_LINK)
        .next()
        .ok_or(IdentifierError::MissingElement("p.name a"))?;
    let href = link.value().attr("href").ok_or(IdentifierError::MissingHref)?;

    capture_id(&LISTING_LINK_RE, href)
}

fn capture_id(re: &Regex, haystack: &str) -> Result<String, IdentifierError> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| IdentifierError::PatternNotFound(haystack.to_string()))
}
