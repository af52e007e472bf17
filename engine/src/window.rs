//! Candidate window resolution.

use crate::directory::Directory;
use anyhow::Result;
use tracing::debug;
use wheelhouse_types::PageWindow;

/// Resolve a paging window into an ordered list of candidate names.
///
/// Read-only. The window size is clamped into
/// `[PageWindow::MIN_SIZE, PageWindow::MAX_SIZE]` before the query, and a
/// window past the end of the population resolves to an empty list rather
/// than an error.
pub async fn resolve_window<D: Directory>(
    directory: &D,
    window: PageWindow,
) -> Result<Vec<String>> {
    // PageWindow::new already clamps, but the contract is on the query:
    // a hand-built window must not reach the store with an oversized page.
    let size = window.size.clamp(PageWindow::MIN_SIZE, PageWindow::MAX_SIZE);
    let names = directory.names_in_window(window.offset, size).await?;
    if names.is_empty() {
        debug!(
            offset = window.offset,
            size, "window resolved to no candidates"
        );
    }
    Ok(names)
}
