use crate::ecs::Page;
use crate::Result;
use std::future::Future;

/// Walks a paginated listing until the service stops handing out a
/// continuation token, returning every item in page order.
pub async fn collect_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut next_token = None;

    loop {
        let page = fetch(next_token.take()).await?;
        items.extend(page.items);

        match page.next_token {
            Some(token) if !token.is_empty() => next_token = Some(token),
            _ => break,
        }
    }

    Ok(items)
}
