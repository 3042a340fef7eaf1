//! Calendar data loading.
//!
//! A source is resolved once per invocation (explicit argument, then the
//! config entry, then `datos.json` in the working directory) and loaded
//! exactly once. There is no retry and no caching; a vanished source is a
//! user-visible error.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::{Client, Response};
use thiserror::Error;

use crate::models::calendar::{Calendar, CalendarDocument};

const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Calendar files are a few KB; anything larger is not our data.
const MAX_DOWNLOAD_BYTES: u64 = 2 * 1024 * 1024;
/// File looked up in the working directory when nothing else is given.
pub const DEFAULT_FILE: &str = "datos.json";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error(
        "no calendar data found: pass a file or URL, set data.source in hitos.toml, \
         or keep a {DEFAULT_FILE} in the working directory"
    )]
    Missing,

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("{origin} is not a valid calendar file: {reason}")]
    Parse { origin: String, reason: String },
}

/// Where calendar data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Path(PathBuf),
    Url(String),
}

impl DataSource {
    pub fn from_arg(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            DataSource::Url(arg.to_string())
        } else {
            DataSource::Path(PathBuf::from(arg))
        }
    }

    /// Apply the resolution order. `configured` is the `data.source`
    /// config entry, already looked up by the caller.
    pub fn resolve(arg: Option<&str>, configured: Option<&str>) -> Result<Self, SourceError> {
        if let Some(arg) = arg {
            return Ok(Self::from_arg(arg));
        }
        if let Some(configured) = configured {
            return Ok(Self::from_arg(configured));
        }
        let default = Path::new(DEFAULT_FILE);
        if default.exists() {
            return Ok(DataSource::Path(default.to_path_buf()));
        }
        Err(SourceError::Missing)
    }

    /// Origin string used in messages and parse errors.
    pub fn origin(&self) -> String {
        match self {
            DataSource::Path(path) => path.display().to_string(),
            DataSource::Url(url) => url.clone(),
        }
    }

    pub fn load(&self) -> Result<Calendar, SourceError> {
        let raw = match self {
            DataSource::Path(path) => {
                fs::read_to_string(path).map_err(|source| SourceError::Read {
                    path: path.clone(),
                    source,
                })?
            }
            DataSource::Url(url) => fetch(url)?,
        };
        let document = parse(&raw, self.is_yaml(), &self.origin())?;
        Ok(document.calendario)
    }

    fn is_yaml(&self) -> bool {
        let name = match self {
            DataSource::Path(path) => path.to_string_lossy().into_owned(),
            // Strip query and fragment before looking at the extension.
            DataSource::Url(url) => url.split(['?', '#']).next().unwrap_or(url).to_string(),
        };
        name.ends_with(".yaml") || name.ends_with(".yml")
    }
}

fn parse(raw: &str, yaml: bool, origin: &str) -> Result<CalendarDocument, SourceError> {
    let parsed = if yaml {
        serde_yaml::from_str(raw).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    };
    parsed.map_err(|reason| SourceError::Parse {
        origin: origin.to_string(),
        reason,
    })
}

fn fetch(url: &str) -> Result<String, SourceError> {
    let client = Client::builder()
        .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
        .user_agent("hitos")
        .build()
        .map_err(|e| fetch_error(url, e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| fetch_error(url, e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        return Err(fetch_error(
            url,
            format!(
                "HTTP {} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown error")
            ),
        ));
    }

    download_text_with_limit(response, MAX_DOWNLOAD_BYTES, url)
}

/// Read the body with size limit enforcement: the Content-Length header
/// is checked first, then the limit is enforced while streaming.
fn download_text_with_limit(
    response: Response,
    max_size: u64,
    url: &str,
) -> Result<String, SourceError> {
    if let Some(content_length) = response.content_length() {
        if content_length > max_size {
            return Err(fetch_error(
                url,
                format!("response of {content_length} bytes exceeds the {max_size} byte limit"),
            ));
        }
    }

    let mut bytes = Vec::new();
    let mut reader = response;
    let mut total_read: u64 = 0;
    let mut buffer = [0u8; 8192];

    loop {
        let n = reader
            .read(&mut buffer)
            .map_err(|e| fetch_error(url, e.to_string()))?;
        if n == 0 {
            break;
        }
        total_read += n as u64;
        if total_read > max_size {
            return Err(fetch_error(
                url,
                format!("response exceeds the {max_size} byte limit"),
            ));
        }
        bytes.extend_from_slice(&buffer[..n]);
    }

    String::from_utf8(bytes).map_err(|_| fetch_error(url, "response is not valid UTF-8".into()))
}

fn fetch_error(url: &str, reason: String) -> SourceError {
    SourceError::Fetch {
        url: url.to_string(),
        reason,
    }
}
