use super::*;

/// Sends `tracing` output to the configured log file. Without one nothing is
/// installed, since the terminal belongs to the UI.
pub(crate) fn init(config: &Config) -> Result {
  let Some(path) = &config.log_file else {
    return Ok(());
  };

  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    fs::create_dir_all(parent).with_context(|| {
      format!("could not create log directory {}", parent.display())
    })?;
  }

  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("could not open log file {}", path.display()))?;

  tracing_subscriber::fmt()
    .with_ansi(false)
    .with_max_level(config.log_level)
    .with_writer(Mutex::new(file))
    .try_init()
    .map_err(|error| anyhow!("could not install log subscriber: {error}"))?;

  Ok(())
}
