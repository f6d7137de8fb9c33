//! Resolution of the server URL and the authentication secret.

use std::path::Path;

use crate::error::ClientError;

/// Environment variable naming the server URL.
pub const RPC_URL_ENV: &str = "RPC_URL";

/// Environment variable naming the file that holds the secret.
pub const CLIENT_SECRET_ENV: &str = "CLIENT_SECRET";

/// Longest secret accepted from a file; the rest is ignored.
pub const MAX_SECRET_LEN: usize = 128;

/// Where to connect and how to authenticate.
///
/// Both fields resolve from an explicit argument first and the
/// environment second; a field with neither source is a configuration
/// error, raised before any connection attempt.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub url: String,
    pub secret: String,
}

impl ClientConfig {
    pub fn resolve(url: Option<String>, secret: Option<String>) -> Result<Self, ClientError> {
        let url = match url {
            Some(url) => url,
            None => std::env::var(RPC_URL_ENV).map_err(|_| {
                ClientError::config(format!("either a url argument or {RPC_URL_ENV} must be set"))
            })?,
        };
        let secret = match secret {
            Some(secret) => secret,
            None => {
                let path = std::env::var(CLIENT_SECRET_ENV).map_err(|_| {
                    ClientError::config(format!(
                        "either a secret argument or {CLIENT_SECRET_ENV} must be set"
                    ))
                })?;
                read_secret_file(Path::new(&path))?
            }
        };
        Ok(Self { url, secret })
    }
}

/// Reads a secret file, capped at [`MAX_SECRET_LEN`] bytes, with
/// trailing whitespace (usually a newline) stripped.
fn read_secret_file(path: &Path) -> Result<String, ClientError> {
    let raw = std::fs::read(path)?;
    let capped = &raw[..raw.len().min(MAX_SECRET_LEN)];
    let secret = std::str::from_utf8(capped).map_err(|_| {
        ClientError::config(format!("secret file {} is not UTF-8", path.display()))
    })?;
    Ok(secret.trim_end().to_string())
}
