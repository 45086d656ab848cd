//! # Taskflow ドメイン層
//!
//! タスク管理サービスのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`task::Task`]）
//! - **値オブジェクト**: バリデーション済みの不変オブジェクト
//!   （[`task::TaskId`], [`task::TaskTitle`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はストア（MongoDB）やハンドラ（axum）には一切依存しない。
//! 唯一の外部依存は `bson`（ストアネイティブの識別子型 `ObjectId`）である。
//!
//! ## 使用例
//!
//! ```rust
//! use taskflow_domain::task::{Task, TaskTitle};
//!
//! let title = TaskTitle::new("牛乳を買う")?;
//! let task = Task::new(title, false);
//! assert!(!task.is_completed());
//! # Ok::<(), taskflow_domain::DomainError>(())
//! ```

pub mod error;
pub mod task;

pub use error::DomainError;
