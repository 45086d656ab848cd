//! # Taskflow API ライブラリ
//!
//! ルーター構築・ハンドラ・エラー変換を公開する。
//! 統合テストは [`app_builder::build_app`] で本番と同一のルーターを組み立て、
//! モックリポジトリを注入して外部契約を検証する。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
