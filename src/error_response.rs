use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
  #[serde(default)]
  pub(crate) error: Option<String>,
}

impl ErrorResponse {
  /// Extracts the server's `error` field from a failed response body.
  pub(crate) fn message(body: &[u8]) -> String {
    serde_json::from_slice::<Self>(body)
      .ok()
      .and_then(|response| response.error)
      .filter(|message| !message.trim().is_empty())
      .unwrap_or_else(|| SERVER_ERROR_MESSAGE.to_string())
  }
}
