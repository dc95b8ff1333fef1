use thiserror::Error;

use crate::api::outcome::ApiOutcome;
use crate::request::options::CheckOptions;
use crate::request::payload::CheckRequest;
use crate::shared::constants::{API_BASE_URL, API_FACE_PATH, REQUEST_TIMEOUT};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

/// Blocking client for the anti-spoofing endpoint.
///
/// Network and server failures never surface as `Err`: per the service's
/// contract they fold into an [`ApiOutcome::Failure`], using the server's
/// error body when it parses and a generic message otherwise. The request
/// timeout bounds how long a check can hang.
pub struct SpoofClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl SpoofClient {
    pub fn new() -> Result<Self, ClientError> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Point the client at a different host. Used by tests and the CLI's
    /// `--endpoint` flag.
    pub fn with_base_url(base_url: &str) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submit one check. Exactly one POST is issued per call.
    pub fn check(&self, payload: &CheckRequest, options: &CheckOptions) -> ApiOutcome {
        let url = format!("{}{}", self.base_url, API_FACE_PATH);
        log::debug!(
            "POST {url} model={} binary={}",
            options.model.as_str(),
            options.binary
        );

        let response = match self
            .http
            .post(&url)
            .query(options)
            .json(payload)
            .send()
        {
            Ok(response) => response,
            Err(e) => {
                log::warn!("request to {url} failed: {e}");
                return ApiOutcome::generic_failure();
            }
        };

        let status = response.status();
        let body = match response.bytes() {
            Ok(body) => body,
            Err(e) => {
                log::warn!("failed to read response body: {e}");
                return ApiOutcome::generic_failure();
            }
        };

        if !status.is_success() {
            log::warn!("server returned {status}");
        }
        ApiOutcome::parse(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    use crate::request::options::ModelVariant;

    /// Serve exactly one canned HTTP response on a loopback port and hand
    /// back the raw request for inspection.
    fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
             Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);

            let mut request = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if let Some(value) = line
                    .to_ascii_lowercase()
                    .strip_prefix("content-length:")
                    .map(str::trim)
                    .and_then(|v| v.parse().ok())
                {
                    content_length = value;
                }
                let done = line == "\r\n";
                request.push_str(&line);
                if done {
                    break;
                }
            }
            let mut body_bytes = vec![0u8; content_length];
            reader.read_exact(&mut body_bytes).unwrap();
            request.push_str(&String::from_utf8_lossy(&body_bytes));

            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).unwrap();
            request
        });

        (format!("http://{addr}"), handle)
    }

    #[test]
    fn test_check_sends_payload_and_options() {
        let (base, handle) = serve_once(
            "200 OK",
            r#"{"class":"Real","probs":{"Real":98.5,"Spoof":1.5},"mode":"binary","model":"convnext"}"#,
        );
        let client = SpoofClient::with_base_url(&base).unwrap();
        let payload = CheckRequest::from_bytes(b"image bytes");
        let options = CheckOptions {
            model: ModelVariant::ConvNext,
            binary: true,
        };

        let outcome = client.check(&payload, &options);

        let request = handle.join().unwrap();
        assert!(request.starts_with("POST /api/face?model=convnext&binary=true "));
        assert!(request.contains(&payload.base64));
        let ApiOutcome::Verdict(verdict) = outcome else {
            panic!("expected a verdict");
        };
        assert_eq!(verdict.class, "Real");
    }

    #[test]
    fn test_check_uses_server_error_body() {
        let (base, handle) = serve_once("400 Bad Request", r#"{"error":"Invalid image"}"#);
        let client = SpoofClient::with_base_url(&base).unwrap();

        let outcome = client.check(&CheckRequest::from_bytes(b"x"), &CheckOptions::default());

        handle.join().unwrap();
        let ApiOutcome::Failure(failure) = outcome else {
            panic!("expected a failure");
        };
        assert_eq!(failure.error, "Invalid image");
    }

    #[test]
    fn test_check_substitutes_generic_error_for_junk_body() {
        let (base, handle) = serve_once("502 Bad Gateway", "<html>upstream died</html>");
        let client = SpoofClient::with_base_url(&base).unwrap();

        let outcome = client.check(&CheckRequest::from_bytes(b"x"), &CheckOptions::default());

        handle.join().unwrap();
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_check_connection_refused_is_generic_failure() {
        // Bind then drop so the port is very likely closed.
        let addr = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let client = SpoofClient::with_base_url(&format!("http://{addr}")).unwrap();

        let outcome = client.check(&CheckRequest::from_bytes(b"x"), &CheckOptions::default());
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = SpoofClient::with_base_url("http://example.com/").unwrap();
        assert_eq!(client.base_url, "http://example.com");
    }
}
