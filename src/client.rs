use {super::*, reqwest::StatusCode, serde::de::DeserializeOwned};

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  /// Turns a non-2xx response into an error carrying the server's message.
  async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
      return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();

    let message = ErrorResponse::message(&body);

    warn!(%status, %message, "request failed");

    bail!(message)
  }

  fn comments_url(&self) -> String {
    format!("{}/comments", self.base_url)
  }

  pub(crate) async fn create_comment(
    &self,
    comment: &NewComment,
  ) -> Result<Comment> {
    debug!(parent_id = ?comment.parent_id, "creating comment");

    let response = self
      .client
      .post(self.comments_url())
      .json(comment)
      .send()
      .await?;

    let body = Self::check(response).await?.bytes().await?;

    let created = Self::decode::<Comment>(&body)
      .context("could not decode created comment")?;

    Ok(created)
  }

  /// Decodes `body` with no nesting limit, growing the stack on demand for
  /// deep reply chains.
  fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    deserializer.disable_recursion_limit();

    let value =
      T::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;

    deserializer.end()?;

    Ok(value)
  }

  pub(crate) async fn delete_comment(&self, id: i64) -> Result {
    debug!(id, "deleting comment");

    let response = self
      .client
      .delete(format!("{}/{id}", self.comments_url()))
      .send()
      .await?;

    Self::check(response).await?;

    Ok(())
  }

  pub(crate) async fn fetch_page(
    &self,
    cursor: &PageCursor,
  ) -> Result<Vec<Comment>> {
    let request = self.page_request(cursor)?;

    debug!(url = %request.url(), "fetching comments");

    let response = Self::check(self.client.execute(request).await?).await?;

    if response.status() == StatusCode::NO_CONTENT {
      return Ok(Vec::new());
    }

    let body = response.bytes().await?;

    let comments = Self::decode::<Option<Vec<Comment>>>(&body)
      .context("could not decode comments")?
      .unwrap_or_default();

    debug!(count = comments.len(), "fetched comments");

    Ok(comments)
  }

  pub(crate) fn new(base_url: &str) -> Self {
    Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client: reqwest::Client::new(),
    }
  }

  fn page_request(&self, cursor: &PageCursor) -> Result<reqwest::Request> {
    let limit = cursor.limit().to_string();
    let offset = cursor.offset().to_string();

    let builder = match cursor.query() {
      Some(query) => self
        .client
        .get(format!("{}/search", self.comments_url()))
        .query(&[
          ("query", query),
          ("limit", limit.as_str()),
          ("offset", offset.as_str()),
        ]),
      None => self.client.get(self.comments_url()).query(&[
        ("limit", limit.as_str()),
        ("offset", offset.as_str()),
        ("sort", cursor.sort().as_str()),
      ]),
    };

    Ok(builder.build()?)
  }
}
