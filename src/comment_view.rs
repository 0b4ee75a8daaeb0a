use super::*;

#[derive(Default)]
pub(crate) struct CommentView {
  nodes: Vec<DisplayNode>,
  offset: usize,
  selected: Option<usize>,
}

impl CommentView {
  pub(crate) fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  pub(crate) fn len(&self) -> usize {
    self.nodes.len()
  }

  pub(crate) fn move_by(&mut self, delta: isize) {
    if self.nodes.is_empty() {
      self.selected = None;
      return;
    }

    let current = self.selected.unwrap_or(0);
    let max_index = self.nodes.len().saturating_sub(1);

    let target = if delta >= 0 {
      let delta_usize = usize::try_from(delta).unwrap_or(usize::MAX);
      current.saturating_add(delta_usize).min(max_index)
    } else {
      let magnitude = delta
        .checked_abs()
        .and_then(|value| usize::try_from(value).ok())
        .unwrap_or(usize::MAX);

      current.saturating_sub(magnitude)
    };

    self.selected = Some(target);
  }

  pub(crate) fn nodes(&self) -> &[DisplayNode] {
    &self.nodes
  }

  pub(crate) fn offset(&self) -> usize {
    self.offset
  }

  pub(crate) fn page_down(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    let delta = isize::try_from(step).unwrap_or(isize::MAX);
    self.move_by(delta);
  }

  pub(crate) fn page_up(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);
    let delta = isize::try_from(step).unwrap_or(isize::MAX);
    self.move_by(-delta);
  }

  /// Swaps in a freshly rendered page, keeping the same comment selected when
  /// it is still on screen.
  pub(crate) fn replace(&mut self, nodes: Vec<DisplayNode>) {
    let selected_id = self.selected_node().map(|node| node.id);

    let kept = selected_id
      .and_then(|id| nodes.iter().position(|node| node.id == id));

    self.nodes = nodes;

    match kept {
      Some(index) => self.selected = Some(index),
      None => {
        self.selected = (!self.nodes.is_empty()).then_some(0);
        self.offset = 0;
      }
    }
  }

  pub(crate) fn select_first_child(&mut self) {
    let Some(selected) = self.selected else {
      return;
    };

    let next = selected.saturating_add(1);

    if self
      .nodes
      .get(next)
      .is_some_and(|node| node.parent == Some(selected))
    {
      self.selected = Some(next);
    }
  }

  pub(crate) fn select_index_at(&mut self, pos: usize) {
    if self.nodes.is_empty() {
      self.selected = None;
      return;
    }

    self.selected = Some(pos.min(self.nodes.len().saturating_sub(1)));
  }

  pub(crate) fn select_next(&mut self) {
    self.move_by(1);
  }

  pub(crate) fn select_parent(&mut self) {
    if let Some(parent) = self.selected_node().and_then(|node| node.parent) {
      self.selected = Some(parent);
    }
  }

  pub(crate) fn select_previous(&mut self) {
    self.move_by(-1);
  }

  pub(crate) fn selected(&self) -> Option<usize> {
    self.selected
  }

  pub(crate) fn selected_node(&self) -> Option<&DisplayNode> {
    self.selected.and_then(|index| self.nodes.get(index))
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    self.offset = offset;
  }
}
