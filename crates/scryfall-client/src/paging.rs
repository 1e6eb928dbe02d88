//! Following paginated lists.

use std::collections::HashSet;
use std::future::Future;

use serde::de::DeserializeOwned;

use scryfall_core::ScryfallList;

use crate::client::{Params, ScryfallClient};
use crate::error::ScryfallResult;

impl ScryfallClient {
    /// Fetch the page after `list`, or `None` on the last page.
    pub async fn next_page<T: DeserializeOwned>(
        &self,
        list: &ScryfallList<T>,
    ) -> ScryfallResult<Option<ScryfallList<T>>> {
        match list.next_page_uri() {
            Some(uri) => self.get_json_url(uri, &Params::new()).await.map(Some),
            None => Ok(None),
        }
    }

    /// Every item of `first` and of each page after it, in order.
    pub async fn all_pages<T: DeserializeOwned>(
        &self,
        first: ScryfallList<T>,
    ) -> ScryfallResult<Vec<T>> {
        collect_pages(first, |uri| async move {
            self.get_json_url(&uri, &Params::new()).await
        })
        .await
    }

    /// Every item of the list at an absolute URL, following pagination.
    pub async fn all_pages_from<T: DeserializeOwned>(&self, uri: &str) -> ScryfallResult<Vec<T>> {
        let first = self.get_json_url(uri, &Params::new()).await?;
        self.all_pages(first).await
    }
}

/// Walk a paginated list starting at `first`, fetching each following page
/// with `fetch`. Stops if a page links back to one already visited.
pub(crate) async fn collect_pages<T, F, Fut>(
    first: ScryfallList<T>,
    mut fetch: F,
) -> ScryfallResult<Vec<T>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = ScryfallResult<ScryfallList<T>>>,
{
    let mut items = Vec::new();
    let mut visited = HashSet::new();
    let mut page = first;

    loop {
        log_warnings(&page.warnings);
        let next = page.next_page_uri().map(str::to_string);
        items.extend(page.data);

        let Some(uri) = next else {
            break;
        };
        if !visited.insert(uri.clone()) {
            log::warn!("pagination loop detected at {uri}; stopping");
            break;
        }
        log::debug!("following next page {uri} ({} items so far)", items.len());
        page = fetch(uri).await?;
    }

    Ok(items)
}

fn log_warnings(warnings: &[String]) {
    for warning in warnings {
        log::warn!("Scryfall: {warning}");
    }
}
