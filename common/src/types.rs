//! 共通型定義
//!
//! RawEndpoint, ServiceIdentity等のコアデータ型

use serde::{Deserialize, Serialize};

/// 生エンドポイント
///
/// ホストサーバー上で発見された1つのURLパスと、そのパスがサポートする
/// HTTPメソッド一覧。メソッドの順序は発見順のまま保持される。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawEndpoint {
    /// URLパス (例: "/users")
    pub path: String,
    /// サポートするHTTPメソッド一覧（発見順）
    pub methods: Vec<String>,
}

impl RawEndpoint {
    /// パスとメソッド一覧から生エンドポイントを作成
    pub fn new(
        path: impl Into<String>,
        methods: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            path: path.into(),
            methods: methods.into_iter().map(Into::into).collect(),
        }
    }
}

/// サービスアイデンティティ
///
/// 認可サービスに対して自サービスを識別する (name, id) の組。
/// 構築後は不変。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceIdentity {
    /// サービス名
    pub name: String,
    /// サービスID
    pub id: String,
}

impl ServiceIdentity {
    /// サービス名とIDからアイデンティティを作成
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}
