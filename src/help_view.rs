use super::*;

pub(crate) struct HelpView {
  visible: bool,
}

impl HelpView {
  pub(crate) fn draw(&self, frame: &mut Frame) {
    if !self.visible {
      return;
    }

    let width = HELP_TEXT
      .lines()
      .map(|line| line.chars().count())
      .max()
      .unwrap_or_default();

    let height = HELP_TEXT.lines().count();

    let area = popup_area(
      frame.area(),
      width.saturating_add(2),
      height.saturating_add(2),
    );

    frame.render_widget(Clear, area);

    let help = Paragraph::new(HELP_TEXT)
      .block(Block::default().title(HELP_TITLE).borders(Borders::ALL))
      .wrap(Wrap { trim: true });

    frame.render_widget(help, area);
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Char('?') | KeyCode::Esc => Command::HideHelp,
      KeyCode::Char('q' | 'Q') => Command::Quit,
      _ => Command::None,
    }
  }

  pub(crate) fn hide(&mut self) {
    self.visible = false;
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.visible
  }

  pub(crate) fn new() -> Self {
    Self { visible: false }
  }

  pub(crate) fn show(&mut self) {
    self.visible = true;
  }
}
