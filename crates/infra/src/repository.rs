//! # リポジトリ実装
//!
//! タスクレコードの永続化操作を定義し、MongoDB 実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: トレイトをここで定義し、ハンドラはトレイト経由で利用
//! - **ストア抽象化**: BSON ドキュメント変換とクエリ組み立てをカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計（[`crate::mock`]）

pub mod task_repository;

pub use task_repository::{MongoTaskRepository, TaskRepository};
