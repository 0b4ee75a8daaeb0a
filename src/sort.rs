#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Sort {
  #[default]
  Asc,
  Desc,
}

impl Sort {
  pub(crate) fn as_str(self) -> &'static str {
    match self {
      Self::Asc => "asc",
      Self::Desc => "desc",
    }
  }

  pub(crate) fn label(self) -> &'static str {
    match self {
      Self::Asc => "oldest first",
      Self::Desc => "newest first",
    }
  }

  pub(crate) fn toggled(self) -> Self {
    match self {
      Self::Asc => Self::Desc,
      Self::Desc => Self::Asc,
    }
  }
}
