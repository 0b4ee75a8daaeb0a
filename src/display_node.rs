use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Toggle {
  Collapsed,
  Expanded,
  Leaf,
}

/// One rendered comment in pre-order, with the tree position flattened into
/// `depth` and `parent`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DisplayNode {
  pub(crate) author: String,
  pub(crate) body: String,
  pub(crate) created_at: DateTime<Utc>,
  pub(crate) deleted: bool,
  pub(crate) depth: usize,
  pub(crate) descendants: usize,
  pub(crate) id: i64,
  pub(crate) parent: Option<usize>,
  pub(crate) toggle: Toggle,
}

impl DisplayNode {
  /// Deleted comments keep their place in the thread but offer no reply or
  /// delete.
  pub(crate) fn accepts_actions(&self) -> bool {
    !self.deleted
  }

  pub(crate) fn has_children(&self) -> bool {
    self.toggle != Toggle::Leaf
  }

  pub(crate) fn header(&self, locale: Locale) -> String {
    let date = locale.format_timestamp(self.created_at);

    if self.has_children() {
      format!(
        "{} · {date} · {}",
        self.author,
        locale.replies(self.descendants)
      )
    } else {
      format!("{} · {date}", self.author)
    }
  }

  pub(crate) fn marker(&self) -> &'static str {
    match self.toggle {
      Toggle::Collapsed => "[+]",
      Toggle::Expanded => "[-]",
      Toggle::Leaf => " · ",
    }
  }
}
