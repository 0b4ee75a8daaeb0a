use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Field {
  #[default]
  Author,
  Content,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ReplyTarget {
  pub(crate) author: String,
  pub(crate) excerpt: String,
  pub(crate) id: i64,
}

/// Author and content fields for a new comment, optionally replying to an
/// existing one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct ComposeForm {
  pub(crate) author: String,
  pub(crate) content: String,
  pub(crate) focus: Field,
  pub(crate) target: Option<ReplyTarget>,
}

impl ComposeForm {
  const EXCERPT_CHARS: usize = 100;
  const WIDTH: usize = 64;

  pub(crate) fn clear(&mut self) {
    self.author.clear();
    self.content.clear();
    self.focus = Field::Author;
  }

  pub(crate) fn draw(&self, frame: &mut Frame) {
    let inner_width = Self::WIDTH.saturating_sub(4);

    let mut text = Vec::new();

    if let Some(target) = &self.target {
      let context =
        format!("Replying to {}: \"{}\"", target.author, target.excerpt);

      for line in wrap_text(&context, inner_width) {
        text.push(Line::from(Span::styled(
          line,
          Style::default().fg(Color::DarkGray),
        )));
      }

      text.push(Line::from(""));
    }

    for (field, label, value) in [
      (Field::Author, "Author", &self.author),
      (Field::Content, "Content", &self.content),
    ] {
      let focused = self.focus == field;

      let label_style = if focused {
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD)
      } else {
        Style::default().fg(Color::White)
      };

      text.push(Line::from(Span::styled(format!("{label}:"), label_style)));

      let mut lines = wrap_text(value, inner_width);

      if lines.is_empty() {
        lines.push(String::new());
      }

      if focused && let Some(last) = lines.last_mut() {
        last.push('_');
      }

      for line in lines {
        text.push(Line::from(format!("{BASE_INDENT}{line}")));
      }

      text.push(Line::from(""));
    }

    text.push(Line::from(Span::styled(
      FORM_STATUS,
      Style::default().fg(Color::DarkGray),
    )));

    let area =
      popup_area(frame.area(), Self::WIDTH, text.len().saturating_add(2));

    let form = Paragraph::new(text)
      .block(Block::default().title(self.title()).borders(Borders::ALL))
      .wrap(Wrap { trim: false });

    frame.render_widget(Clear, area);
    frame.render_widget(form, area);
  }

  fn focused_mut(&mut self) -> &mut String {
    match self.focus {
      Field::Author => &mut self.author,
      Field::Content => &mut self.content,
    }
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Esc => Command::CloseForm,
      KeyCode::Tab | KeyCode::BackTab => {
        self.focus = match self.focus {
          Field::Author => Field::Content,
          Field::Content => Field::Author,
        };

        Command::None
      }
      KeyCode::Enter => match self.focus {
        Field::Author => {
          self.focus = Field::Content;
          Command::None
        }
        Field::Content => Command::SubmitForm,
      },
      KeyCode::Backspace => {
        self.focused_mut().pop();
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

        self.focused_mut().push(ch);

        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn reply_to(node: &DisplayNode) -> Self {
    Self {
      target: Some(ReplyTarget {
        author: node.author.clone(),
        excerpt: truncate(&node.body, Self::EXCERPT_CHARS),
        id: node.id,
      }),
      ..Self::default()
    }
  }

  /// The comment to post, or `None` when either field is blank once trimmed.
  pub(crate) fn submission(&self) -> Option<NewComment> {
    let (author, content) = (self.author.trim(), self.content.trim());

    if author.is_empty() || content.is_empty() {
      return None;
    }

    Some(NewComment {
      author: author.to_string(),
      content: content.to_string(),
      parent_id: self.target.as_ref().map(|target| target.id),
    })
  }

  pub(crate) fn title(&self) -> String {
    match &self.target {
      Some(target) => format!("Reply to {}", truncate(&target.author, 40)),
      None => "New comment".to_string(),
    }
  }
}
