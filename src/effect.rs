use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
  CreateComment { comment: NewComment },
  DeleteComment { id: i64 },
  FetchPage { cursor: PageCursor },
}
