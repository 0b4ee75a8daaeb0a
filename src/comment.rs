use super::*;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Comment {
  #[serde(default)]
  pub(crate) author: String,
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub(crate) children: Vec<Comment>,
  #[serde(default)]
  pub(crate) content: String,
  pub(crate) created_at: DateTime<Utc>,
  #[serde(default)]
  pub(crate) deleted: bool,
  pub(crate) id: i64,
  #[serde(default)]
  pub(crate) parent_id: Option<i64>,
}

impl Comment {
  /// Number of comments below this one at any depth, deleted ones included.
  pub(crate) fn descendant_count(&self) -> usize {
    self
      .children
      .iter()
      .map(|child| child.descendant_count().saturating_add(1))
      .sum()
  }
}
