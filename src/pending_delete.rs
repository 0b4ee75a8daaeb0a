use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct PendingDelete {
  pub(crate) author: String,
  pub(crate) id: i64,
}

impl PendingDelete {
  pub(crate) fn draw(&self, frame: &mut Frame) {
    let prompt = self.prompt();

    let width = prompt.chars().count().saturating_add(4);
    let area = popup_area(frame.area(), width, 5);

    let text = vec![
      Line::from(prompt),
      Line::from(""),
      Line::from(Span::styled(
        "y delete • any other key cancels",
        Style::default().fg(Color::DarkGray),
      )),
    ];

    let dialog = Paragraph::new(text)
      .block(Block::default().title("Delete").borders(Borders::ALL))
      .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('y' | 'Y') => Command::ConfirmDelete,
      _ => Command::CancelDelete,
    }
  }

  pub(crate) fn prompt(&self) -> String {
    format!(
      "Are you sure you want to delete this comment by {}?",
      truncate(&self.author, 40)
    )
  }
}
