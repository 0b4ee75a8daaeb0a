use super::*;

/// Which slice of comments to request next.
///
/// `query` doubles as the search-mode flag: listing and search are mutually
/// exclusive, and sort only applies to the listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PageCursor {
  limit: usize,
  page: usize,
  query: Option<String>,
  sort: Sort,
}

impl PageCursor {
  pub(crate) fn clear_search(&mut self) {
    self.query = None;
    self.page = 1;
  }

  /// The server sends no total, so a full page is taken to mean there is
  /// another one. At an exact multiple of `limit` this offers one empty page.
  pub(crate) fn has_more(&self, returned: usize) -> bool {
    returned == self.limit
  }

  pub(crate) fn is_search_mode(&self) -> bool {
    self.query.is_some()
  }

  pub(crate) fn limit(&self) -> usize {
    self.limit
  }

  pub(crate) fn new(limit: usize) -> Self {
    Self {
      limit: limit.max(1),
      page: 1,
      query: None,
      sort: Sort::default(),
    }
  }

  pub(crate) fn next_page(&mut self, has_more: bool) -> bool {
    if !has_more {
      return false;
    }

    self.page = self.page.saturating_add(1);

    true
  }

  pub(crate) fn offset(&self) -> usize {
    self.page.saturating_sub(1).saturating_mul(self.limit)
  }

  pub(crate) fn page(&self) -> usize {
    self.page
  }

  pub(crate) fn prev_page(&mut self) -> bool {
    if self.page <= 1 {
      return false;
    }

    self.page -= 1;

    true
  }

  pub(crate) fn query(&self) -> Option<&str> {
    self.query.as_deref()
  }

  pub(crate) fn set_sort(&mut self, sort: Sort) {
    self.sort = sort;
    self.page = 1;
  }

  pub(crate) fn sort(&self) -> Sort {
    self.sort
  }

  /// Enters search mode with the trimmed `query`. Returns `false` and leaves
  /// the cursor untouched when nothing remains after trimming.
  pub(crate) fn start_search(&mut self, query: &str) -> bool {
    let query = query.trim();

    if query.is_empty() {
      return false;
    }

    self.query = Some(query.to_string());
    self.page = 1;

    true
  }
}
