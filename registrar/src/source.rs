//! ルートテーブル提供者
//!
//! 稼働中WebアプリケーションインスタンスからRawEndpoint一覧を取り出す
//! ケイパビリティ。フレームワーク依存の抽出処理は本クレートの外側で実装し、
//! このtrait経由で注入する。

use route_registrar_common::types::RawEndpoint;

/// ルートテーブル提供者
pub trait RouteSource {
    /// 現在のエンドポイント一覧を返す
    fn endpoints(&self) -> Vec<RawEndpoint>;
}

/// 手組みのテーブルをそのまま提供者として使えるようにする
impl RouteSource for Vec<RawEndpoint> {
    fn endpoints(&self) -> Vec<RawEndpoint> {
        self.clone()
    }
}

impl RouteSource for [RawEndpoint] {
    fn endpoints(&self) -> Vec<RawEndpoint> {
        self.to_vec()
    }
}
