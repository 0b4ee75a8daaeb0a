use super::*;

/// What the keyboard is currently driving.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum Mode {
  #[default]
  Browse,
  Compose,
  ConfirmDelete(PendingDelete),
  Reply(ComposeForm),
  Search(SearchInput),
}

impl Mode {
  fn browse_key(key: KeyEvent, view: &mut CommentView, page: usize) -> Command {
    let modifiers = key.modifiers;

    let selected = view.selected_node().map(|node| (node.id, node.toggle));

    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        view.page_down(page);
        Command::None
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        view.page_up(page);
        Command::None
      }
      KeyCode::Down | KeyCode::Char('j') => {
        view.select_next();
        Command::None
      }
      KeyCode::Up | KeyCode::Char('k') => {
        view.select_previous();
        Command::None
      }
      KeyCode::PageDown => {
        view.page_down(page);
        Command::None
      }
      KeyCode::PageUp => {
        view.page_up(page);
        Command::None
      }
      KeyCode::Home => {
        view.select_index_at(0);
        Command::None
      }
      KeyCode::End => {
        view.select_index_at(view.len().saturating_sub(1));
        Command::None
      }
      KeyCode::Left | KeyCode::Char('h') => match selected {
        Some((id, Toggle::Expanded)) => Command::ToggleCollapse(id),
        _ => {
          view.select_parent();
          Command::None
        }
      },
      KeyCode::Right | KeyCode::Char('l') => match selected {
        Some((id, Toggle::Collapsed)) => Command::ToggleCollapse(id),
        Some((_, Toggle::Expanded)) => {
          view.select_first_child();
          Command::None
        }
        _ => Command::None,
      },
      KeyCode::Enter | KeyCode::Char(' ') => match selected {
        Some((id, Toggle::Collapsed | Toggle::Expanded)) => {
          Command::ToggleCollapse(id)
        }
        _ => Command::None,
      },
      KeyCode::Char('n' | ']') => Command::NextPage,
      KeyCode::Char('p' | '[') => Command::PrevPage,
      KeyCode::Char('s') => Command::ToggleSort,
      KeyCode::Char('g') => Command::Reload,
      KeyCode::Char('/') => Command::StartSearch,
      KeyCode::Char('x') => Command::ClearSearch,
      KeyCode::Char('c') => Command::OpenCompose,
      KeyCode::Char('r') => Command::OpenReply,
      KeyCode::Char('d') => Command::RequestDelete,
      _ => Command::None,
    }
  }

  pub(crate) fn handle_key(
    &mut self,
    key: KeyEvent,
    view: &mut CommentView,
    compose: &mut ComposeForm,
    page: usize,
  ) -> Command {
    match self {
      Mode::Browse => Self::browse_key(key, view, page),
      Mode::Compose => compose.handle_key(key),
      Mode::ConfirmDelete(_) => PendingDelete::handle_key(key),
      Mode::Reply(form) => form.handle_key(key),
      Mode::Search(input) => input.handle_key(key),
    }
  }
}
