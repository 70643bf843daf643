//! Route Registrar Common
//!
//! 登録クライアントと認可サービス間で共有されるコア型定義

#![warn(missing_docs)]

/// 共通型定義（RawEndpoint, ServiceIdentity等）
pub mod types;

/// 通信プロトコル定義（登録ペイロード）
pub mod protocol;

/// 設定管理
pub mod config;

/// エラー型定義
pub mod error;
