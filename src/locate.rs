use crate::error::MonitorError;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use url::{ParseError, Url};

const E: &str = "Invalid selector";
lazy_static! {
    static ref A: Selector = Selector::parse("a").expect(E);
}

const PDF_SUFFIX: &str = ".pdf";

/// Visible text of an anchor: every descendant text node trimmed, then joined.
fn anchor_text(el: ElementRef) -> String {
    el.text().map(str::trim).collect()
}

/// `href` of the first anchor, in document order, whose text contains
/// `target_text` (ignoring case) and whose link ends in `.pdf`.
pub fn find_pdf_link(doc: &Html, target_text: &str) -> Option<String> {
    let target = target_text.to_lowercase();

    doc.select(&A)
        .filter(|el| anchor_text(*el).to_lowercase().contains(&target))
        .filter_map(|el| el.value().attr("href"))
        .find(|href| href.ends_with(PDF_SUFFIX))
        .map(ToString::to_string)
}

/// Same as [`find_pdf_link`], resolving a relative `href` against the page it came from.
/// An absolute `href` is returned exactly as written.
pub fn locate_pdf(doc: &Html, page_url: &str, target_text: &str) -> Result<String, MonitorError> {
    let href = find_pdf_link(doc, target_text).ok_or_else(|| MonitorError::LinkNotFound {
        target: target_text.to_string(),
    })?;

    match Url::parse(&href) {
        Ok(_) => Ok(href),
        Err(ParseError::RelativeUrlWithoutBase) => {
            Ok(Url::parse(page_url)?.join(&href)?.to_string())
        }
        Err(e) => Err(e.into()),
    }
}
