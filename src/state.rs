use super::*;

pub(crate) struct State {
  alerts: VecDeque<Alert>,
  collapse: CollapseSet,
  compose: ComposeForm,
  cursor: PageCursor,
  has_more: bool,
  help: HelpView,
  list_height: usize,
  loading: usize,
  locale: Locale,
  mode: Mode,
  pending_effects: Vec<Effect>,
  transient_message: Option<TransientMessage>,
  view: CommentView,
}

impl State {
  pub(crate) fn alert(&self) -> Option<&Alert> {
    self.alerts.front()
  }

  fn cancel_delete(&mut self) {
    if matches!(self.mode, Mode::ConfirmDelete(_)) {
      self.mode = Mode::Browse;
    }
  }

  fn cancel_search(&mut self) {
    if matches!(self.mode, Mode::Search(_)) {
      self.mode = Mode::Browse;
    }
  }

  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  fn clear_search(&mut self) {
    info!("clearing search");

    self.cursor.clear_search();
    self.collapse.clear();

    self.load_page();
  }

  fn close_form(&mut self) {
    if matches!(self.mode, Mode::Compose | Mode::Reply(_)) {
      self.mode = Mode::Browse;
    }
  }

  /// Closes the reply form only if it is still the one for `parent_id`.
  fn close_reply_to(&mut self, parent_id: i64) {
    if let Mode::Reply(form) = &self.mode
      && form.target.as_ref().is_some_and(|target| target.id == parent_id)
    {
      self.mode = Mode::Browse;
    }
  }

  pub(crate) fn command_for_key(&mut self, key: KeyEvent) -> Command {
    if self.alert().is_some() {
      return Alert::handle_key(key);
    }

    if self.help.is_visible() {
      return HelpView::handle_key(key);
    }

    let page = self.list_height.max(1);

    self
      .mode
      .handle_key(key, &mut self.view, &mut self.compose, page)
  }

  pub(crate) fn compose(&self) -> &ComposeForm {
    &self.compose
  }

  fn confirm_delete(&mut self) {
    if !matches!(self.mode, Mode::ConfirmDelete(_)) {
      return;
    }

    let Mode::ConfirmDelete(pending) = std::mem::take(&mut self.mode) else {
      return;
    };

    info!(id = pending.id, "deleting comment");

    self
      .pending_effects
      .push(Effect::DeleteComment { id: pending.id });
  }

  pub(crate) fn cursor(&self) -> &PageCursor {
    &self.cursor
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(),
      Command::HideHelp => self.help.hide(),
      Command::DismissAlert => {
        self.alerts.pop_front();
      }
      Command::StartSearch => self.start_search(),
      Command::CancelSearch => self.cancel_search(),
      Command::SubmitSearch => self.submit_search()?,
      Command::ClearSearch => self.clear_search(),
      Command::NextPage => self.next_page(),
      Command::PrevPage => self.prev_page(),
      Command::ToggleSort => self.toggle_sort(),
      Command::ToggleCollapse(id) => self.toggle_collapse(id),
      Command::Reload => self.load_page(),
      Command::OpenCompose => self.mode = Mode::Compose,
      Command::OpenReply => self.open_reply(),
      Command::CloseForm => self.close_form(),
      Command::SubmitForm => self.submit_form()?,
      Command::RequestDelete => self.request_delete(),
      Command::ConfirmDelete => self.confirm_delete(),
      Command::CancelDelete => self.cancel_delete(),
      Command::None => {}
    }

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  /// Applies a finished request, returning any follow-up effects.
  pub(crate) fn handle_event(&mut self, event: Event) -> Vec<Effect> {
    match event {
      Event::Page { cursor, result } => {
        self.loading = self.loading.saturating_sub(1);

        match result {
          Ok(comments) => {
            self.has_more = cursor.has_more(comments.len());

            let nodes =
              tree_renderer::render(&comments, &self.collapse, self.locale);

            self.view.replace(nodes);
          }
          Err(error) => {
            self.has_more = false;
            self.view.replace(Vec::new());
            self.show_alert(error.to_string());
          }
        }
      }
      Event::Created { parent_id, result } => match result {
        Ok(comment) => {
          info!(
            id = comment.id,
            parent_id = ?comment.parent_id,
            "comment created"
          );

          match parent_id {
            Some(parent_id) => self.close_reply_to(parent_id),
            None => {
              self.compose.clear();

              if self.mode == Mode::Compose {
                self.mode = Mode::Browse;
              }
            }
          }

          self.set_transient_message("Comment posted".to_string());

          self.load_page();
        }
        Err(error) => self.show_alert(error.to_string()),
      },
      Event::Deleted { id, result } => match result {
        Ok(()) => {
          info!(id, "comment deleted");

          self.set_transient_message("Comment deleted".to_string());

          self.load_page();
        }
        Err(error) => self.show_alert(error.to_string()),
      },
    }

    std::mem::take(&mut self.pending_effects)
  }

  pub(crate) fn has_more(&self) -> bool {
    self.has_more
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn is_loading(&self) -> bool {
    self.loading > 0
  }

  /// Queues a fetch of the page under the cursor. Overlapping loads are not
  /// fenced, so whichever response arrives last is what gets shown.
  fn load_page(&mut self) {
    debug!(
      page = self.cursor.page(),
      query = ?self.cursor.query(),
      sort = self.cursor.sort().as_str(),
      "loading page"
    );

    self.loading = self.loading.saturating_add(1);

    self.pending_effects.push(Effect::FetchPage {
      cursor: self.cursor.clone(),
    });
  }

  pub(crate) fn locale(&self) -> Locale {
    self.locale
  }

  pub(crate) fn mode(&self) -> &Mode {
    &self.mode
  }

  pub(crate) fn new(cursor: PageCursor, locale: Locale) -> Self {
    Self {
      alerts: VecDeque::new(),
      collapse: CollapseSet::default(),
      compose: ComposeForm::default(),
      cursor,
      has_more: false,
      help: HelpView::new(),
      list_height: 0,
      loading: 0,
      locale,
      mode: Mode::Browse,
      pending_effects: Vec::new(),
      transient_message: None,
      view: CommentView::default(),
    }
  }

  fn next_page(&mut self) {
    if self.cursor.next_page(self.has_more) {
      self.load_page();
    }
  }

  fn open_reply(&mut self) {
    let Some(node) = self.view.selected_node() else {
      return;
    };

    if !node.accepts_actions() {
      return;
    }

    self.mode = Mode::Reply(ComposeForm::reply_to(node));
  }

  fn prev_page(&mut self) {
    if self.cursor.prev_page() {
      self.load_page();
    }
  }

  fn request_delete(&mut self) {
    let Some(node) = self.view.selected_node() else {
      return;
    };

    if !node.accepts_actions() {
      return;
    }

    self.mode = Mode::ConfirmDelete(PendingDelete {
      author: node.author.clone(),
      id: node.id,
    });
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    self.transient_message = Some(TransientMessage::new(message));
  }

  /// Queues a blocking notification. Alerts are shown one at a time, oldest
  /// first.
  pub(crate) fn show_alert(&mut self, message: impl Into<String>) {
    let alert = Alert::new(message);

    warn!(message = alert.message(), "alert");

    self.alerts.push_back(alert);
  }

  fn start_search(&mut self) {
    let buffer = self.cursor.query().unwrap_or_default().to_string();

    self.mode = Mode::Search(SearchInput::new(buffer));
  }

  pub(crate) fn status(&self) -> String {
    if let Some(transient) = &self.transient_message {
      return transient.message().to_string();
    }

    if self.help.is_visible() {
      return HELP_STATUS.to_string();
    }

    match &self.mode {
      Mode::Search(input) => truncate(&input.prompt(), 80),
      Mode::Compose | Mode::Reply(_) => FORM_STATUS.to_string(),
      Mode::ConfirmDelete(pending) => pending.prompt(),
      Mode::Browse if self.is_loading() => LOADING_STATUS.to_string(),
      Mode::Browse => BROWSE_STATUS.to_string(),
    }
  }

  fn submit_form(&mut self) -> Result {
    let form = match &self.mode {
      Mode::Compose => &self.compose,
      Mode::Reply(form) => form,
      _ => return Ok(()),
    };

    let Some(comment) = form.submission() else {
      bail!(EMPTY_FIELDS_MESSAGE);
    };

    self.pending_effects.push(Effect::CreateComment { comment });

    Ok(())
  }

  fn submit_search(&mut self) -> Result {
    let Mode::Search(input) = &self.mode else {
      return Ok(());
    };

    let query = input.buffer.clone();

    if !self.cursor.start_search(&query) {
      bail!(EMPTY_QUERY_MESSAGE);
    }

    info!(query = query.trim(), "searching");

    self.mode = Mode::Browse;
    self.collapse.clear();

    self.load_page();

    Ok(())
  }

  fn toggle_collapse(&mut self, id: i64) {
    let collapsed = self.collapse.toggle(id);

    debug!(id, collapsed, "toggled collapse");

    self.load_page();
  }

  fn toggle_sort(&mut self) {
    let sort = self.cursor.sort().toggled();

    info!(sort = sort.as_str(), "changing sort");

    self.cursor.set_sort(sort);
    self.collapse.clear();

    self.load_page();
  }

  pub(crate) fn update_transient_message(&mut self) {
    if self
      .transient_message
      .as_ref()
      .is_some_and(TransientMessage::is_expired)
    {
      self.transient_message = None;
    }
  }

  pub(crate) fn view(&self) -> &CommentView {
    &self.view
  }

  pub(crate) fn view_mut(&mut self) -> &mut CommentView {
    &mut self.view
  }
}

#[cfg(test)]
mod tests {
  use {super::*, anyhow::anyhow};

  fn comment(id: i64, deleted: bool, children: Vec<Comment>) -> Comment {
    Comment {
      author: format!("user{id}"),
      children,
      content: format!("comment {id}"),
      created_at: DateTime::from_timestamp(0, 0).unwrap(),
      deleted,
      id,
      parent_id: None,
    }
  }

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
  }

  fn new_state() -> State {
    State::new(PageCursor::new(2), Locale::Russian)
  }

  fn dispatch(state: &mut State, command: Command) -> Vec<Effect> {
    state
      .dispatch_command(command)
      .expect("dispatch succeeds")
      .effects
  }

  fn deliver_page(state: &mut State, comments: Vec<Comment>) {
    state.handle_event(Event::Page {
      cursor: state.cursor().clone(),
      result: Ok(comments),
    });
  }

  // A{B(deleted), C{D}} followed by E.
  fn loaded_state() -> State {
    let mut state = new_state();

    let effects = dispatch(&mut state, Command::Reload);
    assert_eq!(effects.len(), 1);

    deliver_page(
      &mut state,
      vec![
        comment(
          1,
          false,
          vec![
            comment(2, true, Vec::new()),
            comment(3, false, vec![comment(4, false, Vec::new())]),
          ],
        ),
        comment(5, false, Vec::new()),
      ],
    );

    state
  }

  fn fetched_cursor(effects: &[Effect]) -> PageCursor {
    match effects {
      [Effect::FetchPage { cursor }] => cursor.clone(),
      other => panic!("expected a single fetch, got {other:?}"),
    }
  }

  #[test]
  fn reload_fetches_current_cursor() {
    let mut state = new_state();

    let cursor = fetched_cursor(&dispatch(&mut state, Command::Reload));

    assert_eq!(cursor.page(), 1);
    assert_eq!(cursor.limit(), 2);
    assert!(state.is_loading());
    assert_eq!(state.status(), LOADING_STATUS);
  }

  #[test]
  fn full_page_enables_next_page() {
    let mut state = loaded_state();

    assert!(state.has_more());
    assert!(!state.is_loading());
    assert_eq!(state.view().len(), 5);

    let cursor = fetched_cursor(&dispatch(&mut state, Command::NextPage));

    assert_eq!(cursor.page(), 2);
    assert_eq!(cursor.offset(), 2);
  }

  #[test]
  fn short_page_disables_next_page() {
    let mut state = new_state();

    deliver_page(&mut state, vec![comment(1, false, Vec::new())]);

    assert!(!state.has_more());
    assert!(dispatch(&mut state, Command::NextPage).is_empty());
    assert_eq!(state.cursor().page(), 1);

    deliver_page(&mut state, Vec::new());

    assert!(!state.has_more());
    assert!(state.view().is_empty());
  }

  #[test]
  fn prev_page_stays_on_first_page() {
    let mut state = loaded_state();

    assert!(dispatch(&mut state, Command::PrevPage).is_empty());

    dispatch(&mut state, Command::NextPage);

    let cursor = fetched_cursor(&dispatch(&mut state, Command::PrevPage));

    assert_eq!(cursor.page(), 1);
  }

  #[test]
  fn toggle_collapse_reloads_and_hides_subtree() {
    let mut state = loaded_state();

    fetched_cursor(&dispatch(&mut state, Command::ToggleCollapse(3)));

    deliver_page(
      &mut state,
      vec![
        comment(
          1,
          false,
          vec![
            comment(2, true, Vec::new()),
            comment(3, false, vec![comment(4, false, Vec::new())]),
          ],
        ),
        comment(5, false, Vec::new()),
      ],
    );

    let ids = state
      .view()
      .nodes()
      .iter()
      .map(|node| node.id)
      .collect::<Vec<_>>();

    assert_eq!(ids, vec![1, 2, 3, 5]);
    assert_eq!(state.view().nodes()[2].toggle, Toggle::Collapsed);
  }

  #[test]
  fn collapse_survives_page_changes() {
    let mut state = loaded_state();

    dispatch(&mut state, Command::ToggleCollapse(1));
    dispatch(&mut state, Command::NextPage);
    dispatch(&mut state, Command::PrevPage);

    deliver_page(
      &mut state,
      vec![comment(1, false, vec![comment(2, false, Vec::new())])],
    );

    assert_eq!(state.view().len(), 1);
  }

  #[test]
  fn search_resets_page_and_collapse() {
    let mut state = loaded_state();

    dispatch(&mut state, Command::ToggleCollapse(1));
    dispatch(&mut state, Command::NextPage);

    assert!(dispatch(&mut state, Command::StartSearch).is_empty());

    for ch in " rust ".chars() {
      let command = state.command_for_key(key(KeyCode::Char(ch)));
      assert_eq!(command, Command::None);
    }

    let command = state.command_for_key(key(KeyCode::Enter));
    assert_eq!(command, Command::SubmitSearch);

    let cursor = fetched_cursor(&dispatch(&mut state, command));

    assert_eq!(cursor.query(), Some("rust"));
    assert_eq!(cursor.page(), 1);
    assert_eq!(*state.mode(), Mode::Browse);

    deliver_page(
      &mut state,
      vec![comment(1, false, vec![comment(2, false, Vec::new())])],
    );

    assert_eq!(state.view().len(), 2, "collapse state was cleared");
  }

  #[test]
  fn empty_search_is_rejected_without_fetching() {
    let mut state = loaded_state();

    dispatch(&mut state, Command::StartSearch);

    let error = state.dispatch_command(Command::SubmitSearch).unwrap_err();

    assert_eq!(error.to_string(), EMPTY_QUERY_MESSAGE);
    assert!(matches!(state.mode(), Mode::Search(_)));
    assert!(!state.cursor().is_search_mode());
  }

  #[test]
  fn clear_search_restores_listing_on_first_page() {
    let mut state = loaded_state();

    dispatch(&mut state, Command::ToggleSort);
    dispatch(&mut state, Command::StartSearch);

    if let Mode::Search(input) = &mut state.mode {
      input.buffer.push_str("rust");
    }

    dispatch(&mut state, Command::SubmitSearch);
    deliver_page(&mut state, vec![comment(1, false, Vec::new()); 2]);
    dispatch(&mut state, Command::NextPage);

    let cursor = fetched_cursor(&dispatch(&mut state, Command::ClearSearch));

    assert!(!cursor.is_search_mode());
    assert_eq!(cursor.page(), 1);
    assert_eq!(cursor.sort(), Sort::Desc);
  }

  #[test]
  fn toggle_sort_resets_page_and_collapse() {
    let mut state = loaded_state();

    dispatch(&mut state, Command::ToggleCollapse(1));
    dispatch(&mut state, Command::NextPage);

    let cursor = fetched_cursor(&dispatch(&mut state, Command::ToggleSort));

    assert_eq!(cursor.sort(), Sort::Desc);
    assert_eq!(cursor.page(), 1);

    deliver_page(
      &mut state,
      vec![comment(1, false, vec![comment(2, false, Vec::new())])],
    );

    assert_eq!(state.view().len(), 2);
  }

  #[test]
  fn failed_page_alerts_and_disables_paging() {
    let mut state = loaded_state();

    state.handle_event(Event::Page {
      cursor: state.cursor().clone(),
      result: Err(anyhow!("failed to get comments")),
    });

    assert!(state.view().is_empty());
    assert!(!state.has_more());
    assert_eq!(
      state.alert().map(Alert::message),
      Some("failed to get comments")
    );

    assert_eq!(
      state.command_for_key(key(KeyCode::Char('n'))),
      Command::None,
      "alerts block other input"
    );

    let command = state.command_for_key(key(KeyCode::Enter));
    assert_eq!(command, Command::DismissAlert);

    dispatch(&mut state, command);
    assert!(state.alert().is_none());
  }

  #[test]
  fn compose_with_blank_fields_is_rejected() {
    let mut state = loaded_state();

    dispatch(&mut state, Command::OpenCompose);
    state.command_for_key(key(KeyCode::Char(' ')));

    let error = state.dispatch_command(Command::SubmitForm).unwrap_err();

    assert_eq!(error.to_string(), EMPTY_FIELDS_MESSAGE);
    assert_eq!(*state.mode(), Mode::Compose);
  }

  #[test]
  fn compose_submits_then_clears_on_success() {
    let mut state = loaded_state();

    dispatch(&mut state, Command::OpenCompose);

    for ch in "anna".chars() {
      state.command_for_key(key(KeyCode::Char(ch)));
    }

    state.command_for_key(key(KeyCode::Tab));

    for ch in "hello".chars() {
      state.command_for_key(key(KeyCode::Char(ch)));
    }

    let effects = dispatch(&mut state, Command::SubmitForm);

    assert_eq!(
      effects,
      vec![Effect::CreateComment {
        comment: NewComment {
          author: "anna".to_string(),
          content: "hello".to_string(),
          parent_id: None,
        },
      }]
    );

    let effects = state.handle_event(Event::Created {
      parent_id: None,
      result: Ok(comment(9, false, Vec::new())),
    });

    assert_eq!(fetched_cursor(&effects).page(), 1);
    assert_eq!(*state.mode(), Mode::Browse);
    assert!(state.compose().author.is_empty());
    assert!(state.compose().content.is_empty());
    assert!(state.is_loading(), "page reloads after posting");
    assert_eq!(state.status(), "Comment posted");
  }

  #[test]
  fn failed_create_keeps_form_open() {
    let mut state = loaded_state();

    dispatch(&mut state, Command::OpenCompose);

    for ch in "anna".chars() {
      state.command_for_key(key(KeyCode::Char(ch)));
    }

    state.handle_event(Event::Created {
      parent_id: None,
      result: Err(anyhow!("failed to create comment")),
    });

    assert_eq!(*state.mode(), Mode::Compose);
    assert_eq!(state.compose().author, "anna");
    assert!(state.alert().is_some());
  }

  #[test]
  fn compose_text_survives_closing_the_form() {
    let mut state = loaded_state();

    dispatch(&mut state, Command::OpenCompose);
    state.command_for_key(key(KeyCode::Char('a')));

    let command = state.command_for_key(key(KeyCode::Esc));
    dispatch(&mut state, command);

    assert_eq!(*state.mode(), Mode::Browse);

    dispatch(&mut state, Command::OpenCompose);

    assert_eq!(state.compose().author, "a");
  }

  #[test]
  fn reply_targets_selected_comment() {
    let mut state = loaded_state();

    state.view_mut().select_index_at(2);

    dispatch(&mut state, Command::OpenReply);

    let Mode::Reply(form) = state.mode() else {
      panic!("expected reply form");
    };

    assert_eq!(form.target.as_ref().map(|target| target.id), Some(3));
    assert!(form.author.is_empty());

    for ch in "boris".chars() {
      state.command_for_key(key(KeyCode::Char(ch)));
    }

    state.command_for_key(key(KeyCode::Enter));

    for ch in "agreed".chars() {
      state.command_for_key(key(KeyCode::Char(ch)));
    }

    let command = state.command_for_key(key(KeyCode::Enter));
    assert_eq!(command, Command::SubmitForm);

    let effects = dispatch(&mut state, command);

    assert!(matches!(
      effects.as_slice(),
      [Effect::CreateComment { comment }] if comment.parent_id == Some(3)
    ));

    state.handle_event(Event::Created {
      parent_id: Some(3),
      result: Ok(comment(10, false, Vec::new())),
    });

    assert_eq!(*state.mode(), Mode::Browse);
  }

  #[test]
  fn finished_reply_leaves_a_newer_reply_form_open() {
    let mut state = loaded_state();

    state.view_mut().select_index_at(2);
    dispatch(&mut state, Command::OpenReply);

    let command = state.command_for_key(key(KeyCode::Esc));
    dispatch(&mut state, command);

    state.view_mut().select_index_at(4);
    dispatch(&mut state, Command::OpenReply);

    state.handle_event(Event::Created {
      parent_id: Some(3),
      result: Ok(comment(10, false, Vec::new())),
    });

    let Mode::Reply(form) = state.mode() else {
      panic!("reply form for comment 5 was closed");
    };

    assert_eq!(form.target.as_ref().map(|target| target.id), Some(5));

    state.handle_event(Event::Created {
      parent_id: Some(5),
      result: Ok(comment(11, false, Vec::new())),
    });

    assert_eq!(*state.mode(), Mode::Browse);
  }

  #[test]
  fn deleted_comments_offer_no_actions() {
    let mut state = loaded_state();

    state.view_mut().select_index_at(1);

    dispatch(&mut state, Command::OpenReply);
    assert_eq!(*state.mode(), Mode::Browse);

    dispatch(&mut state, Command::RequestDelete);
    assert_eq!(*state.mode(), Mode::Browse);
  }

  #[test]
  fn delete_requires_confirmation() {
    let mut state = loaded_state();

    assert!(dispatch(&mut state, Command::RequestDelete).is_empty());
    assert!(matches!(state.mode(), Mode::ConfirmDelete(_)));

    let command = state.command_for_key(key(KeyCode::Char('n')));
    assert_eq!(command, Command::CancelDelete);

    assert!(dispatch(&mut state, command).is_empty());
    assert_eq!(*state.mode(), Mode::Browse);

    dispatch(&mut state, Command::RequestDelete);

    let command = state.command_for_key(key(KeyCode::Char('y')));

    assert_eq!(
      dispatch(&mut state, command),
      vec![Effect::DeleteComment { id: 1 }]
    );

    let effects = state.handle_event(Event::Deleted {
      id: 1,
      result: Ok(()),
    });

    fetched_cursor(&effects);

    assert!(state.is_loading(), "page reloads after deleting");
  }

  #[test]
  fn soft_deleted_comment_reappears_masked() {
    let mut state = loaded_state();

    let mut thread = comment(3, true, vec![comment(4, false, Vec::new())]);
    thread.content = "gone".to_string();

    deliver_page(&mut state, vec![thread]);

    let nodes = state.view().nodes();

    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].body, "[Комментарий удален]");
    assert_eq!(nodes[1].parent, Some(0));
  }

  #[test]
  fn overlapping_loads_render_the_last_response() {
    let mut state = new_state();

    dispatch(&mut state, Command::Reload);
    dispatch(&mut state, Command::Reload);

    deliver_page(&mut state, vec![comment(1, false, Vec::new())]);
    assert!(state.is_loading());

    deliver_page(&mut state, vec![comment(2, false, Vec::new())]);
    assert!(!state.is_loading());

    assert_eq!(state.view().nodes()[0].id, 2);
  }

  #[test]
  fn quit_exits() {
    let mut state = new_state();

    let dispatch = state
      .dispatch_command(Command::Quit)
      .expect("dispatch succeeds");

    assert!(dispatch.should_exit);
    assert!(dispatch.effects.is_empty());
  }

  #[test]
  fn help_captures_keys_until_hidden() {
    let mut state = new_state();

    dispatch(&mut state, Command::ShowHelp);

    assert!(state.help().is_visible());
    assert_eq!(state.status(), HELP_STATUS);
    assert_eq!(state.command_for_key(key(KeyCode::Char('n'))), Command::None);

    let command = state.command_for_key(key(KeyCode::Esc));
    dispatch(&mut state, command);

    assert!(!state.help().is_visible());
  }
}
