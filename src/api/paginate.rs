//! Sequential pagination over server-paginated list endpoints

use std::future::Future;

use log::debug;

use crate::config::api;
use crate::error::{Error, Result};

use super::meta::ListOpts;
use super::transport::Envelope;

/// Fetch every page of a list endpoint as one flat sequence.
///
/// `fetch` performs one page request and returns the items together with
/// the response envelope. Pages are requested strictly in order: page N+1
/// is asked for only after page N returned and only if its envelope names
/// a `next` link. Items stay in server order; the driver imposes no page
/// cap of its own.
pub async fn paginate_all<T, F, Fut>(per_page: Option<u32>, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(ListOpts) -> Fut,
    Fut: Future<Output = Result<(Vec<T>, Envelope)>>,
{
    let mut opts = ListOpts {
        page: Some(1),
        per_page: Some(per_page.unwrap_or(api::DEFAULT_PER_PAGE)),
    };
    let mut all_items = Vec::new();

    loop {
        let (items, envelope) = fetch(opts).await?;
        debug!(
            "Page {:?} returned {} items",
            opts.page,
            items.len()
        );
        all_items.extend(items);

        match envelope.links.next {
            None => break,
            Some(ref next) => {
                opts.page = Some(next_page_number(next)?);
            }
        }
    }

    debug!("Pagination complete: {} items total", all_items.len());
    Ok(all_items)
}

/// Extract the `page` query integer from a `next` link.
///
/// A next link the server handed out but that we cannot follow is a
/// malformed reply, the same class of failure as an undecodable body.
fn next_page_number(next: &str) -> Result<u32> {
    let url = reqwest::Url::parse(next)
        .map_err(|e| Error::Decode(format!("unparseable next link '{}': {}", next, e)))?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
        .ok_or_else(|| {
            Error::Decode(format!(
                "next link '{}' has no parseable page parameter",
                next
            ))
        })
}
