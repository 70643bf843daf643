//! 登録クライアント
//!
//! ルートテーブルを登録ペイロードへ組み立て、認可サービスへ1回の
//! POSTで送信する。登録呼び出しごとにボディをローカルに構築するため、
//! 同一クライアントへの並行呼び出しが互いの状態を壊すことはない。

use reqwest::Method;
use route_registrar_common::config::RegistrarConfig;
use route_registrar_common::error::{CommonError, RegistrarResult};
use route_registrar_common::protocol::{RegistrationBody, RegistrationRecord};
use route_registrar_common::types::{RawEndpoint, ServiceIdentity};
use serde::Serialize;

use crate::normalize::normalize;
use crate::source::RouteSource;
use crate::transport::{HttpTransport, Transport, TransportResponse};

/// 登録クライアント
///
/// サービスアイデンティティと認可サービスの登録エンドポイントURLを保持する。
/// いずれも構築後は不変。
pub struct Registrar<T: Transport = HttpTransport> {
    identity: ServiceIdentity,
    auth_endpoint: String,
    transport: T,
}

impl Registrar<HttpTransport> {
    /// 設定からreqwestベースのクライアントを作成
    pub fn new(identity: ServiceIdentity, config: &RegistrarConfig) -> RegistrarResult<Self> {
        Ok(Self {
            identity,
            auth_endpoint: config.auth_endpoint.clone(),
            transport: HttpTransport::new(config)?,
        })
    }
}

impl<T: Transport> Registrar<T> {
    /// 注入したトランスポートでクライアントを作成
    pub fn with_transport(
        identity: ServiceIdentity,
        auth_endpoint: impl Into<String>,
        transport: T,
    ) -> Self {
        Self {
            identity,
            auth_endpoint: auth_endpoint.into(),
            transport,
        }
    }

    /// サービスアイデンティティへの参照を返す
    pub fn identity(&self) -> &ServiceIdentity {
        &self.identity
    }

    /// 登録エンドポイントURLを返す
    pub fn auth_endpoint(&self) -> &str {
        &self.auth_endpoint
    }

    /// ルートテーブルを正規化して登録する
    ///
    /// テーブルを正規化し、ペイロードを組み立てて1回POSTする。
    /// 非2xx応答もエラーとせず、応答をそのまま返す。
    pub async fn register_table(
        &self,
        table: &[RawEndpoint],
    ) -> RegistrarResult<TransportResponse> {
        let body = self.body_for_table(table);
        self.post_body(body).await
    }

    /// 注入されたルートテーブル提供者から取得して登録する
    pub async fn register_from_source(
        &self,
        source: &dyn RouteSource,
    ) -> RegistrarResult<TransportResponse> {
        self.register_table(&source.endpoints()).await
    }

    /// ルート一覧を直接登録する
    ///
    /// 正規化は行わない。呼び出し元が与えた形をそのままペイロードに
    /// 載せる（構造チェックなし）。正規化済みレコード以外の形でも、
    /// 認可サービスが受け付けるならそのまま通る。
    pub async fn register_records<R: Serialize>(
        &self,
        routes: R,
    ) -> RegistrarResult<TransportResponse> {
        let body = RegistrationBody::new(&self.identity, routes);
        self.post_body(body).await
    }

    /// テーブルに対応する登録ボディを構築する（純粋関数）
    pub fn body_for_table(&self, table: &[RawEndpoint]) -> RegistrationBody {
        let records: Vec<RegistrationRecord> = normalize(table, &self.identity.name);
        RegistrationBody::new(&self.identity, records)
    }

    async fn post_body<R: Serialize>(
        &self,
        body: RegistrationBody<R>,
    ) -> RegistrarResult<TransportResponse> {
        let body = serde_json::to_value(&body).map_err(CommonError::from)?;
        self.transport
            .send(Method::POST, &self.auth_endpoint, Some(body))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use route_registrar_common::error::RegistrarError;
    use serde_json::json;
    use std::sync::Mutex;

    /// 送信内容を記録して固定応答を返すフェイクトランスポート
    struct RecordingTransport {
        sent: Mutex<Vec<(Method, String, Option<serde_json::Value>)>>,
        response: TransportResponse,
    }

    impl RecordingTransport {
        fn new(response: TransportResponse) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                response,
            }
        }

        fn ok() -> Self {
            Self::new(TransportResponse {
                status: StatusCode::CREATED,
                body: Some(json!({"status": "registered"})),
            })
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(
            &self,
            method: Method,
            url: &str,
            body: Option<serde_json::Value>,
        ) -> RegistrarResult<TransportResponse> {
            self.sent
                .lock()
                .unwrap()
                .push((method, url.to_string(), body));
            Ok(self.response.clone())
        }
    }

    /// 常に失敗するフェイクトランスポート
    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn send(
            &self,
            _method: Method,
            _url: &str,
            _body: Option<serde_json::Value>,
        ) -> RegistrarResult<TransportResponse> {
            Err(RegistrarError::Http("connection refused".to_string()))
        }
    }

    fn registrar<T: Transport>(transport: T) -> Registrar<T> {
        Registrar::with_transport(
            ServiceIdentity::new("svc", "svc-001"),
            "http://auth.internal:3400/auth/service",
            transport,
        )
    }

    #[tokio::test]
    async fn test_register_table_sends_single_post() {
        let client = registrar(RecordingTransport::ok());
        let table = vec![RawEndpoint::new("/users", ["GET", "POST"])];

        let response = client.register_table(&table).await.unwrap();

        assert_eq!(response.status, StatusCode::CREATED);
        assert_eq!(response.body, Some(json!({"status": "registered"})));

        let sent = client.transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);

        let (method, url, body) = &sent[0];
        assert_eq!(*method, Method::POST);
        assert_eq!(url, "http://auth.internal:3400/auth/service");
        assert_eq!(
            *body,
            Some(json!({
                "name": "svc",
                "serviceId": "svc-001",
                "routes": [
                    {
                        "method": "GET",
                        "route": "/users",
                        "group": "/users",
                        "name": "/users GET",
                        "description": "GET method for route : /users, for service : svc"
                    },
                    {
                        "method": "POST",
                        "route": "/users",
                        "group": "/users",
                        "name": "/users POST",
                        "description": "POST method for route : /users, for service : svc"
                    }
                ]
            }))
        );
    }

    #[tokio::test]
    async fn test_register_table_empty() {
        let client = registrar(RecordingTransport::ok());

        client.register_table(&[]).await.unwrap();

        let sent = client.transport.sent.lock().unwrap();
        let (_, _, body) = &sent[0];
        assert_eq!(body.as_ref().unwrap()["routes"], json!([]));
    }

    #[tokio::test]
    async fn test_register_records_passthrough() {
        // 直接登録は正規化もレコード形の強制もしない
        let client = registrar(RecordingTransport::ok());
        let routes = json!([{"whatever": "shape", "nested": {"n": 1}}]);

        client.register_records(routes.clone()).await.unwrap();

        let sent = client.transport.sent.lock().unwrap();
        let (_, _, body) = &sent[0];
        assert_eq!(body.as_ref().unwrap()["routes"], routes);
    }

    #[tokio::test]
    async fn test_register_from_source() {
        let client = registrar(RecordingTransport::ok());
        let source = vec![RawEndpoint::new("/items", ["DELETE"])];

        client.register_from_source(&source).await.unwrap();

        let sent = client.transport.sent.lock().unwrap();
        let (_, _, body) = &sent[0];
        assert_eq!(
            body.as_ref().unwrap()["routes"][0]["name"],
            json!("/items DELETE")
        );
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let client = registrar(FailingTransport);

        let result = client.register_table(&[]).await;

        match result {
            Err(RegistrarError::Http(message)) => assert_eq!(message, "connection refused"),
            other => panic!("unexpected result: {:?}", other.map(|r| r.status)),
        }
    }

    #[test]
    fn test_body_for_table_reflects_arguments() {
        let client = registrar(RecordingTransport::ok());
        let table = vec![RawEndpoint::new("/users", ["GET"])];

        let body = client.body_for_table(&table);

        assert_eq!(client.identity().name, "svc");
        assert_eq!(
            client.auth_endpoint(),
            "http://auth.internal:3400/auth/service"
        );
        assert_eq!(body.name, "svc");
        assert_eq!(body.service_id, "svc-001");
        assert_eq!(body.routes.len(), 1);
        assert_eq!(body.routes[0].name, "/users GET");
    }
}
