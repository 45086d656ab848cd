//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保つ: 検証 → ストアアクセス → レスポンス変換のみ

pub mod health;
pub mod task;

pub use health::{health_check, hello};
pub use task::{TaskState, create_task, delete_task, get_task, list_tasks, update_task};
