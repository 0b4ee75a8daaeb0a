use super::*;

/// Flattens `comments` into display nodes, depth first.
///
/// Children of a collapsed comment are left out of the output entirely, so
/// collapsing is a change to `collapse` followed by a fresh render.
pub(crate) fn render(
  comments: &[Comment],
  collapse: &CollapseSet,
  locale: Locale,
) -> Vec<DisplayNode> {
  let mut nodes = Vec::new();

  for comment in comments {
    push_node(&mut nodes, comment, None, 0, collapse, locale);
  }

  nodes
}

/// Pushes `comment` and its visible subtree, returning how many comments sit
/// below it at any depth, hidden ones included.
fn push_node(
  nodes: &mut Vec<DisplayNode>,
  comment: &Comment,
  parent: Option<usize>,
  depth: usize,
  collapse: &CollapseSet,
  locale: Locale,
) -> usize {
  let toggle = if comment.children.is_empty() {
    Toggle::Leaf
  } else if collapse.contains(comment.id) {
    Toggle::Collapsed
  } else {
    Toggle::Expanded
  };

  let body = if comment.deleted {
    locale.deleted_placeholder().to_string()
  } else {
    sanitize_comment(&comment.content)
  };

  let index = nodes.len();

  nodes.push(DisplayNode {
    author: comment.author.clone(),
    body,
    created_at: comment.created_at,
    deleted: comment.deleted,
    depth,
    descendants: 0,
    id: comment.id,
    parent,
    toggle,
  });

  let descendants = if toggle == Toggle::Expanded {
    comment
      .children
      .iter()
      .map(|child| {
        push_node(
          nodes,
          child,
          Some(index),
          depth.saturating_add(1),
          collapse,
          locale,
        )
        .saturating_add(1)
      })
      .sum()
  } else {
    comment.descendant_count()
  };

  nodes[index].descendants = descendants;

  descendants
}
