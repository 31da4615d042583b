//! Sequential page collection shared by the adapters.
//!
//! Vendors report an authoritative total with every page. The loop starts from
//! an optimistic total, refreshes it from each page, and advances by the number
//! of items the vendor actually returned, so short or empty pages cannot stall it.

use std::future::Future;

use crate::error::Result;

/// Position of the page being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageRequest {
    /// 1-based page number, for page-number APIs.
    pub number: u32,
    /// Items already collected, for offset APIs.
    pub offset: u32,
}

/// One page of vendor results.
#[derive(Debug)]
pub(crate) struct Page<T> {
    pub items: Vec<T>,
    /// Total item count reported by the vendor.
    pub total: u32,
}

/// Total assumed before the first page has been seen.
const OPTIMISTIC_TOTAL: u32 = u32::MAX;

/// Fetches pages until the reported total is reached and returns every item.
///
/// Stops on the first error, on an empty page, or once `offset >= total`.
pub(crate) async fn collect_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut request = PageRequest {
        number: 1,
        offset: 0,
    };
    let mut total = OPTIMISTIC_TOTAL;

    while request.offset < total {
        let page = fetch(request).await?;
        total = page.total;

        let returned = u32::try_from(page.items.len()).unwrap_or(u32::MAX);
        if returned == 0 {
            if total > request.offset {
                log::warn!(
                    "empty page at offset {} with reported total {total}, stopping",
                    request.offset
                );
            }
            break;
        }

        items.extend(page.items);
        request.offset = request.offset.saturating_add(returned);
        request.number += 1;
    }

    Ok(items)
}
