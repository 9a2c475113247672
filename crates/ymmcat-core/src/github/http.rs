//! Minimal blocking HTTP GET over libcurl.

use std::time::Duration;

/// Status code and full body of a completed GET.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Leading part of the body for error messages (at most `max_chars` chars).
    pub fn body_prefix(&self, max_chars: usize) -> String {
        String::from_utf8_lossy(&self.body)
            .chars()
            .take(max_chars)
            .collect()
    }
}

/// Performs a GET request with the given `Name: value` headers.
///
/// Follows redirects. Non-2xx statuses are returned, not treated as errors.
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn get(url: &str, headers: &[(String, String)]) -> Result<HttpResponse, curl::Error> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(60))?;

    let mut list = curl::easy::List::new();
    for (k, v) in headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))?;
    }
    if !headers.is_empty() {
        easy.http_headers(list)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok(HttpResponse { status, body })
}
