//! 設定管理
//!
//! RegistrarConfig等の設定構造体

use serde::{Deserialize, Serialize};

/// 登録クライアント設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrarConfig {
    /// 認可サービスの登録エンドポイントURL
    /// (デフォルト: "http://localhost:3400/auth/service")
    #[serde(default = "default_auth_endpoint")]
    pub auth_endpoint: String,

    /// HTTPクライアントタイムアウト（秒）(デフォルト: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_auth_endpoint() -> String {
    "http://localhost:3400/auth/service".to_string()
}

fn default_timeout() -> u64 {
    10
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            auth_endpoint: default_auth_endpoint(),
            timeout_secs: default_timeout(),
        }
    }
}
