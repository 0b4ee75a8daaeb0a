use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Config {
  pub(crate) api_url: String,
  pub(crate) locale: Locale,
  pub(crate) log_file: Option<PathBuf>,
  pub(crate) log_level: Level,
  pub(crate) page_size: usize,
}

impl Config {
  const API_URL_VAR: &str = "THREADS_API_URL";
  const DEFAULT_API_URL: &str = "http://localhost:8080";
  const DEFAULT_PAGE_SIZE: usize = 10;
  const LOCALE_VAR: &str = "THREADS_LOCALE";
  const LOG_FILE_VAR: &str = "THREADS_LOG_FILE";
  const LOG_LEVEL_VAR: &str = "THREADS_LOG_LEVEL";
  const PAGE_SIZE_VAR: &str = "THREADS_PAGE_SIZE";

  /// Builds a config from `lookup`, which maps a variable name to its value.
  /// Blank values count as unset.
  pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |name: &str| {
      lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
    };

    let api_url = get(Self::API_URL_VAR)
      .unwrap_or_else(|| Self::DEFAULT_API_URL.to_string());

    if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
      bail!(
        "{} must start with http:// or https://, got `{api_url}`",
        Self::API_URL_VAR
      );
    }

    let page_size = match get(Self::PAGE_SIZE_VAR) {
      Some(value) => value.parse::<usize>().with_context(|| {
        format!("invalid {} value `{value}`", Self::PAGE_SIZE_VAR)
      })?,
      None => Self::DEFAULT_PAGE_SIZE,
    };

    if page_size == 0 {
      bail!("{} must be greater than zero", Self::PAGE_SIZE_VAR);
    }

    let locale = match get(Self::LOCALE_VAR) {
      Some(value) => value
        .parse::<Locale>()
        .with_context(|| format!("invalid {} value", Self::LOCALE_VAR))?,
      None => Locale::default(),
    };

    let log_level = match get(Self::LOG_LEVEL_VAR) {
      Some(value) => value.parse::<Level>().with_context(|| {
        format!("invalid {} value `{value}`", Self::LOG_LEVEL_VAR)
      })?,
      None => Level::INFO,
    };

    Ok(Self {
      api_url,
      locale,
      log_file: get(Self::LOG_FILE_VAR).map(PathBuf::from),
      log_level,
      page_size,
    })
  }

  pub(crate) fn load() -> Result<Self> {
    Self::from_lookup(|name| env::var(name).ok())
  }
}
