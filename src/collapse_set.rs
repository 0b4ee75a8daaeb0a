use super::*;

#[derive(Clone, Debug, Default)]
pub(crate) struct CollapseSet {
  ids: HashSet<i64>,
}

impl CollapseSet {
  pub(crate) fn clear(&mut self) {
    self.ids.clear();
  }

  pub(crate) fn contains(&self, id: i64) -> bool {
    self.ids.contains(&id)
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.ids.is_empty()
  }

  /// Flips membership of `id`, returning `true` when it is now collapsed.
  pub(crate) fn toggle(&mut self, id: i64) -> bool {
    if self.ids.remove(&id) {
      false
    } else {
      self.ids.insert(id);
      true
    }
  }
}
