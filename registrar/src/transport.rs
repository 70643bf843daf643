//! HTTP送信ケイパビリティ
//!
//! 登録クライアントが使う注入可能なトランスポート層。
//! ステータスコードの解釈・リトライは一切行わず、結果を素通しする。

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use route_registrar_common::config::RegistrarConfig;
use route_registrar_common::error::{RegistrarError, RegistrarResult};
use std::time::Duration;
use tracing::debug;

/// トランスポート応答
///
/// 認可サービスが返したステータスとボディの素通し。成功/失敗の判定は
/// 呼び出し元に委ねる。
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    /// HTTPステータスコード
    pub status: StatusCode,
    /// レスポンスボディ（JSONとして解釈できない場合はNone）
    pub body: Option<serde_json::Value>,
}

/// HTTP送信ケイパビリティ
///
/// `body` が `Some` の場合のみJSONボディを添付する。
/// 1回の呼び出しにつきネットワーク呼び出しはちょうど1回。
#[async_trait]
pub trait Transport: Send + Sync {
    /// リクエストを送信し、応答を素通しで返す
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> RegistrarResult<TransportResponse>;
}

/// reqwestベースの標準トランスポート
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    /// 設定からトランスポートを作成
    pub fn new(config: &RegistrarConfig) -> RegistrarResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RegistrarError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
    ) -> RegistrarResult<TransportResponse> {
        debug!("Sending {} request to {}", method, url);

        let mut request = self.http_client.request(method, url);
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                RegistrarError::Timeout(format!("Request to {} timed out", url))
            } else {
                RegistrarError::Http(format!("Failed to send request: {}", e))
            }
        })?;

        let status = response.status();
        let body = response.json::<serde_json::Value>().await.ok();

        Ok(TransportResponse { status, body })
    }
}
