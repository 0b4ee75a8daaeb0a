use super::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SearchInput {
  pub(crate) buffer: String,
}

impl SearchInput {
  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Esc => Command::CancelSearch,
      KeyCode::Enter => Command::SubmitSearch,
      KeyCode::Backspace => {
        self.buffer.pop();
        Command::None
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return Command::None;
        }

        self.buffer.push(ch);

        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn new(buffer: String) -> Self {
    Self { buffer }
  }

  pub(crate) fn prompt(&self) -> String {
    format!("Search: {}", self.buffer)
  }
}
