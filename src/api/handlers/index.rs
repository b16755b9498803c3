//! Handler for the index page.

use axum::{extract::State, response::Html};

use crate::state::AppState;

/// Built-in usage page served when no index file is present.
const FALLBACK_INDEX: &str = r#"<!DOCTYPE html>
<html>
<head><title>URL Shortener</title></head>
<body>
<h1>URL Shortener API</h1>
<p>Place an <code>index.html</code> next to the binary (or set
<code>INDEX_FILE</code>) to serve a custom interface.</p>
<h2>API Usage:</h2>
<pre>
# Shorten URL:
curl -X POST http://localhost:5000/shorten \
  -H "Content-Type: application/json" \
  -d '{"url": "https://www.example.com"}'

# Visit shortened URL:
curl -I http://localhost:5000/SHORT_CODE
</pre>
<p><a href="/health">Health Check</a> | <a href="/stats">Stats</a> | <a href="/list">List URLs</a></p>
</body>
</html>
"#;

/// Serves the web interface.
///
/// # Endpoint
///
/// `GET /`
///
/// Reads the configured index file if it exists, otherwise falls back to a
/// built-in usage page describing the API surface.
pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    match tokio::fs::read_to_string(&state.index_file).await {
        Ok(contents) => Html(contents),
        Err(_) => Html(FALLBACK_INDEX.to_string()),
    }
}
