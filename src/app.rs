use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  /// Runs `command` and starts whatever it asks for. Returns `true` on quit.
  fn dispatch(&mut self, command: Command) -> bool {
    match self.state.dispatch_command(command) {
      Ok(dispatch) => {
        for effect in dispatch.effects {
          self.execute_effect(effect);
        }

        dispatch.should_exit
      }
      Err(error) => {
        self.state.clear_pending_effects();
        self.state.show_alert(error.to_string());
        false
      }
    }
  }

  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(layout[1].height as usize);

    frame.render_widget(Paragraph::new(self.header()), layout[0]);

    let locale = self.state.locale();
    let view = self.state.view();

    let list_items: Vec<ListItem> = if view.is_empty() {
      let text = if self.state.is_loading() {
        LOADING_STATUS.to_string()
      } else if let Some(query) = self.state.cursor().query() {
        format!("No comments match \"{}\".", truncate(query, 40))
      } else {
        "No comments yet. Press c to write one.".to_string()
      };

      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(text, Style::default().fg(Color::DarkGray)),
      ]))]
    } else {
      view
        .nodes()
        .iter()
        .map(|node| Self::node_list_item(node, locale, layout[1].width))
        .collect()
    };

    let selected = view.selected();
    let offset = view.offset().min(selected.unwrap_or(0));

    let mut list_state = ListState::default()
      .with_selected(selected)
      .with_offset(offset);

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[1], &mut list_state);

    self.state.view_mut().set_offset(list_state.offset());

    let status = Paragraph::new(self.state.status())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    match self.state.mode() {
      Mode::Compose => self.state.compose().draw(frame),
      Mode::Reply(form) => form.draw(frame),
      Mode::ConfirmDelete(pending) => pending.draw(frame),
      Mode::Browse | Mode::Search(_) => {}
    }

    self.state.help().draw(frame);

    if let Some(alert) = self.state.alert() {
      alert.draw(frame);
    }
  }

  fn execute_effect(&self, effect: Effect) {
    let (client, sender) = (self.client.clone(), self.event_tx.clone());

    match effect {
      Effect::CreateComment { comment } => {
        let parent_id = comment.parent_id;

        self.handle.spawn(async move {
          let _ = sender.send(Event::Created {
            parent_id,
            result: client.create_comment(&comment).await,
          });
        });
      }
      Effect::DeleteComment { id } => {
        self.handle.spawn(async move {
          let _ = sender.send(Event::Deleted {
            id,
            result: client.delete_comment(id).await,
          });
        });
      }
      Effect::FetchPage { cursor } => {
        self.handle.spawn(async move {
          let result = client.fetch_page(&cursor).await;

          let _ = sender.send(Event::Page { cursor, result });
        });
      }
    }
  }

  fn header(&self) -> Line<'static> {
    let cursor = self.state.cursor();

    let mut spans = vec![
      Span::styled(
        "COMMENTS",
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      ),
      Span::raw(format!("  page {}", cursor.page())),
    ];

    match cursor.query() {
      Some(query) => spans.push(Span::raw(format!(
        "  search: \"{}\" (x to clear)",
        truncate(query, 40)
      ))),
      None => {
        spans.push(Span::raw(format!("  sort: {}", cursor.sort().label())));
      }
    }

    let mut paging = Vec::new();

    if cursor.page() > 1 {
      paging.push("p prev");
    }

    if self.state.has_more() {
      paging.push("n next");
    }

    if !paging.is_empty() {
      spans.push(Span::styled(
        format!("  {}", paging.join(" • ")),
        Style::default().fg(Color::DarkGray),
      ));
    }

    Line::from(spans)
  }

  pub(crate) fn new(client: Client, state: State) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    }
  }

  fn node_list_item(
    node: &DisplayNode,
    locale: Locale,
    available_width: u16,
  ) -> ListItem<'static> {
    let depth_indent = "  ".repeat(node.depth);
    let indent = format!("{BASE_INDENT}{depth_indent}");

    let mut lines = vec![Line::from(vec![
      Span::raw(indent.clone()),
      Span::raw(node.marker()),
      Span::raw(" "),
      Span::styled(node.header(locale), Style::default().fg(Color::White)),
    ])];

    let body_style = if node.deleted {
      Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC)
    } else {
      Style::default().fg(Color::Gray)
    };

    let body_indent = format!("{indent}    ");
    let prefix_width = body_indent.chars().count();

    let max_width = available_width as usize;
    let wrap_width = max_width.saturating_sub(prefix_width).max(1);

    for line in wrap_text(&node.body, wrap_width) {
      lines.push(Line::from(vec![
        Span::raw(body_indent.clone()),
        Span::styled(line, body_style),
      ]));
    }

    lines.push(Line::from(Span::raw(indent)));

    ListItem::new(lines)
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      for effect in self.state.handle_event(event) {
        self.execute_effect(effect);
      }
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    if self.dispatch(Command::Reload) {
      return Ok(());
    }

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = self.state.command_for_key(key);

      if self.dispatch(command) {
        break;
      }
    }

    Ok(())
  }
}
