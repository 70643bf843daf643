//! 通信プロトコル定義
//!
//! 登録クライアント→認可サービス間の登録ペイロード

use serde::{Deserialize, Serialize};

use crate::types::ServiceIdentity;

/// 登録レコード
///
/// 正規化済みの (path, method) 1組に対応するエントリ。
/// `route` と `group` はいずれも元のパスを保持する
/// （このバージョンに独立したグルーピング分類は存在しない）。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationRecord {
    /// HTTPメソッド (例: "GET")
    pub method: String,
    /// ルートパス
    pub route: String,
    /// グループ（= ルートパス）
    pub group: String,
    /// 表示名 ("<path> <method>")
    pub name: String,
    /// 説明文 ("<method> method for route : <path>, for service : <serviceName>")
    pub description: String,
}

/// 登録リクエストボディ
///
/// 認可サービスにPOSTされるワイヤペイロード:
///
/// ```json
/// { "name": "...", "serviceId": "...", "routes": [...] }
/// ```
///
/// `routes` はジェネリック。通常は `Vec<RegistrationRecord>` だが、
/// 直接登録では呼び出し元が与えた任意のシリアライズ可能な形を
/// そのまま通す（構造チェックは行わない）。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistrationBody<R = Vec<RegistrationRecord>> {
    /// サービス名
    pub name: String,
    /// サービスID
    #[serde(rename = "serviceId")]
    pub service_id: String,
    /// 登録対象ルート一覧（正規化順）
    pub routes: R,
}

impl<R> RegistrationBody<R> {
    /// サービスアイデンティティとルート一覧からボディを構築
    pub fn new(identity: &ServiceIdentity, routes: R) -> Self {
        Self {
            name: identity.name.clone(),
            service_id: identity.id.clone(),
            routes,
        }
    }
}
