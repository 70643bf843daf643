//! ルートテーブル正規化
//!
//! フレームワーク固有の `{path, methods[]}` 一覧を、(path, method) 1組につき
//! 1レコードのフラットな登録レコード一覧へ変換する

use route_registrar_common::protocol::RegistrationRecord;
use route_registrar_common::types::RawEndpoint;

/// 生エンドポイント一覧を登録レコード一覧へ正規化
///
/// 各エンドポイントの各メソッド（順序保持）につき1レコードを生成する。
/// 重複排除は行わない。パス・メソッドの内容検証も行わない
/// （空文字列や非標準メソッドはそのまま通す）。
///
/// # Arguments
/// * `endpoints` - ホストサーバーから取得した生エンドポイント一覧
/// * `service_name` - 説明文に埋め込むサービス名
pub fn normalize(endpoints: &[RawEndpoint], service_name: &str) -> Vec<RegistrationRecord> {
    let mut records = Vec::new();

    for endpoint in endpoints {
        for method in &endpoint.methods {
            records.push(RegistrationRecord {
                method: method.clone(),
                route: endpoint.path.clone(),
                group: endpoint.path.clone(),
                name: format!("{} {}", endpoint.path, method),
                description: format!(
                    "{} method for route : {}, for service : {}",
                    method, endpoint.path, service_name
                ),
            });
        }
    }

    records
}
