//! # Taskflow インフラ層
//!
//! ドキュメントストア（MongoDB）との通信を担当する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: リポジトリトレイトを定義し、ハンドラはトレイト経由で
//!   ストアにアクセスする
//! - **ストア抽象化**: MongoDB 固有の処理（ドキュメント変換、クエリ組み立て）を
//!   このクレートにカプセル化
//! - **テスタビリティ**: `test-utils` feature でインメモリモックを公開
//!
//! ## モジュール構成
//!
//! - [`db`] - クライアント接続の確立
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと MongoDB 実装

pub mod db;
pub mod error;
pub mod repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use error::{InfraError, InfraErrorKind};
