use super::*;

#[derive(Clone)]
pub(crate) struct TransientMessage {
  expires_at: Instant,
  message: String,
}

impl TransientMessage {
  pub(crate) fn is_expired(&self) -> bool {
    Instant::now() >= self.expires_at
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn new(message: String) -> Self {
    Self {
      expires_at: Instant::now() + Duration::from_secs(3),
      message,
    }
  }
}
