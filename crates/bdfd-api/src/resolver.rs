//! Completion of partial tags against the remote tag list.

use crate::client::RemoteClient;
use crate::error::ApiResult;
use crate::family::ResourceFamily;

/// First tag, in list order, that contains `partial` anywhere.
///
/// Containment rather than prefix: `"addB"` matches `"$addButton[]"`.
pub fn find_tag<'a>(tags: &'a [String], partial: &str) -> Option<&'a str> {
    tags.iter().map(String::as_str).find(|tag| tag.contains(partial))
}

/// Fetch the tag list of `family` and complete `partial` against it.
///
/// One round trip per call; the list is not cached. A failed fetch is a
/// transport error, never a miss.
pub async fn resolve(
    client: &RemoteClient,
    family: ResourceFamily,
    partial: &str,
) -> ApiResult<Option<String>> {
    let tags = client.get_tag_list(family).await?;
    let found = find_tag(&tags, partial).map(str::to_string);

    match &found {
        Some(tag) => tracing::debug!("resolved {family} tag '{partial}' to '{tag}'"),
        None => tracing::debug!(
            "no {family} tag contains '{partial}' ({} candidates)",
            tags.len()
        ),
    }

    Ok(found)
}
