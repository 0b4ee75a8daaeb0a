use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Locale {
  English,
  #[default]
  Russian,
}

/// CLDR plural category of a count. English uses `One` and `Other`,
/// Russian uses `One`, `Few` and `Many`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PluralCategory {
  Few,
  Many,
  One,
  Other,
}

impl Locale {
  pub(crate) fn deleted_placeholder(self) -> &'static str {
    match self {
      Self::English => "[comment deleted]",
      Self::Russian => "[Комментарий удален]",
    }
  }

  pub(crate) fn format_timestamp(self, timestamp: DateTime<Utc>) -> String {
    timestamp
      .with_timezone(&Local)
      .format(self.timestamp_format())
      .to_string()
  }

  pub(crate) fn plural_category(self, count: usize) -> PluralCategory {
    match self {
      Self::English => {
        if count == 1 {
          PluralCategory::One
        } else {
          PluralCategory::Other
        }
      }
      Self::Russian => {
        if (11..=14).contains(&(count % 100)) {
          return PluralCategory::Many;
        }

        match count % 10 {
          1 => PluralCategory::One,
          2..=4 => PluralCategory::Few,
          _ => PluralCategory::Many,
        }
      }
    }
  }

  pub(crate) fn replies(self, count: usize) -> String {
    let form = match (self, self.plural_category(count)) {
      (Self::English, PluralCategory::One) => "reply",
      (Self::English, _) => "replies",
      (Self::Russian, PluralCategory::One) => "ответ",
      (Self::Russian, PluralCategory::Few) => "ответа",
      (Self::Russian, _) => "ответов",
    };

    format!("{count} {form}")
  }

  pub(crate) fn timestamp_format(self) -> &'static str {
    match self {
      Self::English => "%Y-%m-%d %H:%M",
      Self::Russian => "%d.%m.%Y, %H:%M:%S",
    }
  }
}

impl FromStr for Locale {
  type Err = anyhow::Error;

  fn from_str(value: &str) -> Result<Self> {
    match value.trim().to_ascii_lowercase().as_str() {
      "en" | "en-us" | "en-gb" | "english" => Ok(Self::English),
      "ru" | "ru-ru" | "russian" => Ok(Self::Russian),
      other => bail!("unsupported locale `{other}`, expected `ru` or `en`"),
    }
  }
}
