//! Cursor-following pagination
//!
//! Provider list calls return one page at a time plus an optional
//! continuation marker. [`collect_pages`] keeps asking for the next page
//! until the provider stops handing out markers.

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_marker: Option<String>,
}

impl<T> Page<T> {
    /// A final page (no continuation)
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_marker: None,
        }
    }

    /// A page followed by more results
    pub fn with_marker(items: Vec<T>, marker: impl Into<String>) -> Self {
        Self {
            items,
            next_marker: Some(marker.into()),
        }
    }

    /// Continuation marker, treating an empty marker as absent
    pub fn next_marker(&self) -> Option<&str> {
        self.next_marker.as_deref().filter(|m| !m.is_empty())
    }
}

/// Fetch every page and concatenate the items in page order.
///
/// `fetch` is called with `None` first, then with each marker the previous
/// page returned. There is no page limit; the loop ends only when a page
/// carries no marker (or an empty one). The first error aborts the listing.
pub fn collect_pages<T, E, F>(mut fetch: F) -> Result<Vec<T>, E>
where
    F: FnMut(Option<&str>) -> Result<Page<T>, E>,
{
    let mut items = Vec::new();
    let mut marker: Option<String> = None;

    loop {
        let page = fetch(marker.as_deref())?;
        let next = page.next_marker().map(str::to_string);
        items.extend(page.items);

        match next {
            Some(next) => marker = Some(next),
            None => return Ok(items),
        }
    }
}
