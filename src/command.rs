#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  CancelDelete,
  CancelSearch,
  ClearSearch,
  CloseForm,
  ConfirmDelete,
  DismissAlert,
  HideHelp,
  NextPage,
  None,
  OpenCompose,
  OpenReply,
  PrevPage,
  Quit,
  Reload,
  RequestDelete,
  ShowHelp,
  StartSearch,
  SubmitForm,
  SubmitSearch,
  ToggleCollapse(i64),
  ToggleSort,
}
