use super::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct NewComment {
  pub(crate) author: String,
  pub(crate) content: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) parent_id: Option<i64>,
}
