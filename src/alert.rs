use super::*;

/// A notification that blocks other input until it is dismissed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Alert {
  message: String,
}

impl Alert {
  pub(crate) fn draw(&self, frame: &mut Frame) {
    let frame_area = frame.area();

    let width = self
      .message
      .chars()
      .count()
      .clamp(ALERT_STATUS.len(), 60)
      .saturating_add(4);

    let lines = wrap_text(&self.message, width.saturating_sub(4));

    let area = popup_area(frame_area, width, lines.len().saturating_add(4));

    let mut text = lines.into_iter().map(Line::from).collect::<Vec<_>>();

    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
      ALERT_STATUS,
      Style::default().fg(Color::DarkGray),
    )));

    let alert = Paragraph::new(text)
      .block(
        Block::default()
          .title(ALERT_TITLE)
          .borders(Borders::ALL)
          .border_style(Style::default().fg(Color::Red)),
      )
      .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(alert, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
        Command::DismissAlert
      }
      _ => Command::None,
    }
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }
}
