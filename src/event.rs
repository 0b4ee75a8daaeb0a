use super::*;

pub(crate) enum Event {
  Created {
    parent_id: Option<i64>,
    result: Result<Comment>,
  },
  Deleted {
    id: i64,
    result: Result,
  },
  Page {
    cursor: PageCursor,
    result: Result<Vec<Comment>>,
  },
}
