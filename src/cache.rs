//! Remembers the signed-in session between runs.
//!
//! Files live under the configured cache directory in a folder named after a
//! hash of the server URL, so tokens issued by one backend are never sent to
//! another. The format is a tiny TOML file with the bearer token and, when
//! known, who it belongs to.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const SESSION_FILE: &str = "session.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedSession {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

pub fn server_dir(cache_dir: &Path, server_url: &str) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(server_url.trim_end_matches('/').as_bytes());
    let hash = format!("{:x}", hasher.finalize());
    cache_dir.join(hash)
}

fn session_path(cache_dir: &Path, server_url: &str) -> PathBuf {
    server_dir(cache_dir, server_url).join(SESSION_FILE)
}

/// Load the cached session for a server, if present and readable.
pub fn load_session(cache_dir: &Path, server_url: &str) -> Option<CachedSession> {
    let path = session_path(cache_dir, server_url);
    let data = fs::read_to_string(&path).ok()?;
    match toml::from_str::<CachedSession>(&data) {
        Ok(session) if !session.token.trim().is_empty() => Some(session),
        Ok(_) => None,
        Err(err) => {
            warn!(path = %path.display(), "Ignoring unreadable session cache: {err}");
            None
        }
    }
}

/// Persist the session. Errors are logged and otherwise ignored to keep the
/// UI responsive.
pub fn save_session(cache_dir: &Path, server_url: &str, session: &CachedSession) {
    let path = session_path(cache_dir, server_url);
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            warn!(path = %parent.display(), "Could not create cache directory: {err}");
            return;
        }
    }
    match toml::to_string(session) {
        Ok(contents) => {
            if let Err(err) = fs::write(&path, contents) {
                warn!(path = %path.display(), "Could not write session cache: {err}");
            } else {
                debug!(path = %path.display(), "Saved session");
            }
        }
        Err(err) => warn!("Could not serialize session: {err}"),
    }
}

pub fn clear_session(cache_dir: &Path, server_url: &str) {
    let path = session_path(cache_dir, server_url);
    match fs::remove_file(&path) {
        Ok(()) => debug!(path = %path.display(), "Cleared session"),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => warn!(path = %path.display(), "Could not clear session cache: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_cache(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("studydeck-cache-{name}-{}", std::process::id()))
    }

    #[test]
    fn session_round_trips_per_server() {
        let dir = temp_cache("roundtrip");
        let session = CachedSession {
            token: "jwt-token".to_string(),
            user_name: Some("Ada".to_string()),
            user_email: None,
        };
        save_session(&dir, "http://localhost:5000/api", &session);

        assert_eq!(
            load_session(&dir, "http://localhost:5000/api/"),
            Some(session)
        );
        assert_eq!(load_session(&dir, "https://other.example.com/api"), None);

        clear_session(&dir, "http://localhost:5000/api");
        assert_eq!(load_session(&dir, "http://localhost:5000/api"), None);
        clear_session(&dir, "http://localhost:5000/api");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn blank_or_corrupt_sessions_are_ignored() {
        let dir = temp_cache("corrupt");
        let path = session_path(&dir, "http://server");
        fs::create_dir_all(path.parent().unwrap()).unwrap();

        fs::write(&path, "token = \"  \"").unwrap();
        assert_eq!(load_session(&dir, "http://server"), None);

        fs::write(&path, "token = ").unwrap();
        assert_eq!(load_session(&dir, "http://server"), None);
        let _ = fs::remove_dir_all(&dir);
    }
}
