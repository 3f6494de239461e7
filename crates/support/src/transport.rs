//! Blocking HTTP POST to CRS endpoints.
//!
//! POST requests follow redirects and return the response body for every
//! status code; only connection, TLS and timeout failures are errors. A
//! request without its own timeout uses the poster's default. When a timeout
//! applies, connecting may take at most half of it.
//!
//! ```no_run
//! use std::time::Duration;
//! use ors_support::HttpPoster;
//!
//! let poster = HttpPoster::new(true);
//! let body = poster.post_json(
//!     "https://crs.example.com/search",
//!     r#"{"epc":"2"}"#,
//!     Some(Duration::from_secs(30)),
//!     &[("PHPSESSID", "abc123")],
//! )?;
//! # Ok::<(), ors_support::TransportError>(())
//! ```

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::redirect::Policy;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use tracing::{debug, warn};
use url::Url;

use crate::config::SupportConfig;
use crate::error::TransportError;

/// Content type of JSON requests.
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// Content type of form requests.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Sends POST and HEAD requests.
#[derive(Debug, Clone)]
pub struct HttpPoster {
    verify_tls: bool,
    default_timeout: Option<Duration>,
}

impl HttpPoster {
    /// Creates a poster. With `verify_tls` off, invalid certificates are
    /// accepted.
    pub fn new(verify_tls: bool) -> Self {
        if !verify_tls {
            warn!("TLS certificate verification is disabled for CRS requests");
        }
        Self {
            verify_tls,
            default_timeout: None,
        }
    }

    /// Creates a poster from configuration.
    pub fn from_config(config: &SupportConfig) -> Self {
        let mut poster = Self::new(config.verify_tls);
        poster.default_timeout = config.http_timeout();
        poster
    }

    /// Returns the timeout used by requests that pass none of their own.
    pub fn default_timeout(&self) -> Option<Duration> {
        self.default_timeout
    }

    /// POSTs a JSON document and returns the response body.
    ///
    /// `cookies` are sent as a single `Cookie: a=1; b=2` header.
    pub fn post_json(
        &self,
        url: &str,
        body: &str,
        timeout: Option<Duration>,
        cookies: &[(&str, &str)],
    ) -> Result<String, TransportError> {
        let mut request = self
            .client(timeout.or(self.default_timeout), Policy::default())?
            .post(parse_url(url)?)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body.to_string());
        if let Some(cookie) = cookie_header(cookies, "; ", "") {
            request = request.header(COOKIE, cookie);
        }
        self.send(request, url, false)
    }

    /// POSTs a raw request body and returns the response body.
    ///
    /// `cookies` are sent as a single `Cookie: a=1; b=2;` header. Response
    /// headers are logged at debug level.
    pub fn post_form(
        &self,
        url: &str,
        body: &str,
        timeout: Option<Duration>,
        cookies: &[(&str, &str)],
    ) -> Result<String, TransportError> {
        let mut request = self
            .client(timeout.or(self.default_timeout), Policy::default())?
            .post(parse_url(url)?)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body.to_string());
        if let Some(cookie) = cookie_header(cookies, " ", ";") {
            request = request.header(COOKIE, cookie);
        }
        self.send(request, url, true)
    }

    /// Returns `true` if a HEAD request to `url` answers with a status below
    /// 400. Redirects are not followed, so a 3xx counts as found.
    pub fn is_remote_file(&self, url: &str, timeout: Duration) -> bool {
        let Ok(parsed) = parse_url(url) else {
            return false;
        };
        let result = self
            .client(Some(timeout), Policy::none())
            .and_then(|client| Ok(client.head(parsed).send()?));
        match result {
            Ok(response) => {
                let status = response.status();
                debug!(url, status = status.as_u16(), "Remote file check");
                !status.is_client_error() && !status.is_server_error()
            }
            Err(e) => {
                debug!(url, error = %e, "Remote file check failed");
                false
            }
        }
    }

    fn client(
        &self,
        timeout: Option<Duration>,
        redirect: Policy,
    ) -> Result<Client, TransportError> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!self.verify_tls)
            .redirect(redirect)
            .timeout(timeout)
            .connect_timeout(timeout.map(|t| t / 2))
            .build()?;
        Ok(client)
    }

    fn send(
        &self,
        request: RequestBuilder,
        url: &str,
        log_headers: bool,
    ) -> Result<String, TransportError> {
        debug!(url, "Sending CRS request");
        let response = request.send()?;
        let status = response.status();
        if log_headers {
            for (name, value) in response.headers() {
                debug!(
                    header = %name,
                    value = value.to_str().unwrap_or("<binary>"),
                    "CRS response header"
                );
            }
        }
        let body = response.text()?;
        debug!(url, status = status.as_u16(), bytes = body.len(), "CRS response received");
        Ok(body)
    }
}

fn parse_url(url: &str) -> Result<Url, TransportError> {
    Url::parse(url).map_err(|_| TransportError::InvalidUrl {
        url: url.to_string(),
    })
}

fn cookie_header(cookies: &[(&str, &str)], separator: &str, terminator: &str) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    let pairs: Vec<String> = cookies
        .iter()
        .map(|(name, value)| format!("{name}={value}{terminator}"))
        .collect();
    Some(pairs.join(separator))
}
