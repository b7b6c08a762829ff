mod app_config;
mod config;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};

/// Desktop browser identity presented on page fetches.
///
/// Many retail sites serve degraded or blocking markup to clients they do not
/// recognize as browsers; this is a compatibility shim, not cloaking.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/100.0.4896.127 Safari/537.36";

/// Normalized metadata bundle extracted from a single web page.
///
/// `title` and `description` are empty strings when unresolved; `image` and
/// `price` serialize as JSON `null`. `price`, when present, is a canonical
/// decimal string: `.` separator, no currency symbol or thousands separator.
/// `url` is the caller's original request URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub price: Option<String>,
    pub url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
