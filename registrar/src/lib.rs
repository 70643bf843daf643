//! Route Registrar
//!
//! 稼働中Webアプリケーションのルートテーブルを認可サービスに登録するクライアント

#![warn(missing_docs)]

/// ルートテーブル正規化（コア変換ロジック）
pub mod normalize;

/// 登録クライアント
pub mod client;

/// HTTP送信ケイパビリティ
pub mod transport;

/// ルートテーブル提供者
pub mod source;
