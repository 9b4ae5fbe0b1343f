use std::path::PathBuf;

use chrono::Utc;

use crate::types::Session;

/// Owns the persisted login session. The session file is the only durable
/// client-side state; it is written on successful login, read before every
/// authenticated request and deleted on logout.
pub struct SessionManager {
    session: Session,
}

impl SessionManager {
    pub fn new(access_token: String, email: String) -> Self {
        SessionManager {
            session: Session {
                access_token,
                email,
                obtained_at: Utc::now().timestamp() as u64,
            },
        }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::session_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let session: Session = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { session })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::session_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.session).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    pub async fn clear() -> Result<(), String> {
        async_fs::remove_file(Self::session_path())
            .await
            .map_err(|e| e.to_string())
    }

    pub fn token(&self) -> &str {
        &self.session.access_token
    }

    pub fn email(&self) -> &str {
        &self.session.email
    }

    fn session_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("certcli/cache/session.json");
        path
    }
}
