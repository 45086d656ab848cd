//! # タスク
//!
//! サービスが扱う唯一のエンティティ。タイトルと完了フラグを持ち、
//! ストアが発番する識別子で一意に特定される。
//!
//! ## 設計判断
//!
//! ### Newtype パターンの採用
//!
//! [`TaskId`] は `bson::oid::ObjectId` をラップした Newtype である。これにより:
//!
//! - 型安全性: 生の文字列や ObjectId の取り違えをコンパイラが検出
//! - 検証の一元化: パスパラメータの形式チェックは [`TaskId::parse_str`] のみ
//! - ゼロコスト: 実行時のオーバーヘッドなし
//!
//! ### ObjectId の採用
//!
//! 識別子はストア（MongoDB）のネイティブな発番方式に従う。
//! 24 桁 16 進文字列として表現され、形式違反はルックアップ前に
//! 検証エラーとして弾く。
//!
//! ## 使用例
//!
//! ```rust
//! use taskflow_domain::task::{Task, TaskId, TaskTitle};
//!
//! // 作成エンドポイントでの新規生成
//! let task = Task::new(TaskTitle::new("牛乳を買う")?, false);
//!
//! // パスパラメータからの復元（形式検証付き）
//! let id = TaskId::parse_str(&task.id().to_string())?;
//! assert_eq!(&id, task.id());
//! # Ok::<(), taskflow_domain::DomainError>(())
//! ```

use bson::oid::ObjectId;
use derive_more::Display;

use crate::DomainError;

/// タスクの一意識別子
///
/// ストアネイティブの ObjectId をラップする。クライアントから受け取った
/// 文字列は必ず [`parse_str`](TaskId::parse_str) を通し、形式違反を
/// ストアアクセス前に検出する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct TaskId(ObjectId);

impl TaskId {
   /// 新しいタスク ID を生成する
   ///
   /// タスク作成時に使用する。ObjectId はタイムスタンプを含むため
   /// 生成順にソート可能。
   pub fn new() -> Self {
      Self(ObjectId::new())
   }

   /// 既存の ObjectId からタスク ID を作成する
   ///
   /// ストアから取得したドキュメントを復元する際に使用する。
   pub fn from_object_id(oid: ObjectId) -> Self {
      Self(oid)
   }

   /// 文字列からタスク ID をパースする
   ///
   /// 24 桁 16 進の ObjectId 形式でない場合は検証エラーを返す。
   /// パスパラメータの検証はこの関数に一元化する。
   pub fn parse_str(s: &str) -> Result<Self, DomainError> {
      ObjectId::parse_str(s)
         .map(Self)
         .map_err(|_| DomainError::Validation("id must be a valid object id".to_string()))
   }

   /// 内部の ObjectId 参照を取得する
   ///
   /// ストアへのクエリ条件を組み立てる際に使用する。
   pub fn as_object_id(&self) -> &ObjectId {
      &self.0
   }
}

impl Default for TaskId {
   fn default() -> Self {
      Self::new()
   }
}

/// タスクのタイトル
///
/// 前後の空白を除去した上で空でないことを構築時に保証する。
/// 永続化されたタスクのタイトルが空にならないという不変条件は
/// この型の存在によって守られる。
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct TaskTitle(String);

impl TaskTitle {
   /// タイトルを検証して作成する
   ///
   /// # エラー
   ///
   /// trim 後に空文字列となる場合は `DomainError::Validation` を返す。
   pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
      let value = value.into().trim().to_string();

      if value.is_empty() {
         return Err(DomainError::Validation(
            "title must not be empty".to_string(),
         ));
      }

      Ok(Self(value))
   }

   /// 文字列参照を取得する
   pub fn as_str(&self) -> &str {
      &self.0
   }

   /// 所有権を持つ文字列に変換する
   pub fn into_string(self) -> String {
      self.0
   }
}

/// タスクエンティティ
///
/// ストアが正規のレコードを所有し、ハンドラはリクエスト単位の
/// 一時的なコピーのみを保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
   id:           TaskId,
   title:        TaskTitle,
   is_completed: bool,
}

impl Task {
   /// 新しいタスクを作成する
   ///
   /// 識別子はこの時点で発番される。`is_completed` のデフォルト値
   /// （`false`）の適用は呼び出し側（検証済みリクエスト構造体）の責務。
   pub fn new(title: TaskTitle, is_completed: bool) -> Self {
      Self {
         id: TaskId::new(),
         title,
         is_completed,
      }
   }

   /// ストアから取得した値でタスクを復元する
   pub fn from_db(id: TaskId, title: TaskTitle, is_completed: bool) -> Self {
      Self {
         id,
         title,
         is_completed,
      }
   }

   /// 部分更新を適用する
   ///
   /// 指定されたフィールドのみを置き換え、未指定のフィールドは
   /// 現在の値を保持する。
   pub fn apply_patch(&mut self, patch: &TaskPatch) {
      if let Some(title) = &patch.title {
         self.title = title.clone();
      }
      if let Some(is_completed) = patch.is_completed {
         self.is_completed = is_completed;
      }
   }

   pub fn id(&self) -> &TaskId {
      &self.id
   }

   pub fn title(&self) -> &TaskTitle {
      &self.title
   }

   pub fn is_completed(&self) -> bool {
      self.is_completed
   }
}

/// タスクの部分更新内容
///
/// `None` のフィールドは「変更しない」を意味する。両方 `None` の
/// パッチも有効で、その場合レコードは変更されない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
   pub title:        Option<TaskTitle>,
   pub is_completed: Option<bool>,
}

impl TaskPatch {
   /// 変更対象のフィールドが一つもないか
   pub fn is_empty(&self) -> bool {
      self.title.is_none() && self.is_completed.is_none()
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   // ===== TaskId テスト =====

   #[test]
   fn test_parse_strで生成済みidを復元できる() {
      let id = TaskId::new();
      let restored = TaskId::parse_str(&id.to_string()).unwrap();

      assert_eq!(id, restored);
   }

   #[rstest]
   #[case::空文字列("")]
   #[case::短すぎる16進("abc123")]
   #[case::長さは正しいが16進でない("zzzzzzzzzzzzzzzzzzzzzzzz")]
   #[case::uuid形式("0198c5f2-7d4e-7c3a-9b1f-2a4d6e8f0a1c")]
   fn test_parse_strが不正な形式を拒否する(#[case] input: &str) {
      let result = TaskId::parse_str(input);

      assert!(result.is_err());
      assert_eq!(
         result.unwrap_err().detail(),
         "id must be a valid object id"
      );
   }

   #[test]
   fn test_displayが24桁16進文字列を出力する() {
      let id = TaskId::new();
      let rendered = id.to_string();

      assert_eq!(rendered.len(), 24);
      assert!(rendered.chars().all(|c| c.is_ascii_hexdigit()));
   }

   // ===== TaskTitle テスト =====

   #[test]
   fn test_newが前後の空白を除去する() {
      let title = TaskTitle::new("  牛乳を買う  ").unwrap();

      assert_eq!(title.as_str(), "牛乳を買う");
   }

   #[rstest]
   #[case::空文字列("")]
   #[case::空白のみ("   ")]
   #[case::タブと改行("\t\n")]
   fn test_newが空のタイトルを拒否する(#[case] input: &str) {
      let result = TaskTitle::new(input);

      assert!(result.is_err());
      assert_eq!(result.unwrap_err().detail(), "title must not be empty");
   }

   // ===== Task テスト =====

   #[test]
   fn test_newで識別子が発番される() {
      let a = Task::new(TaskTitle::new("a").unwrap(), false);
      let b = Task::new(TaskTitle::new("b").unwrap(), false);

      assert_ne!(a.id(), b.id());
   }

   #[test]
   fn test_apply_patchがタイトルのみ置き換える() {
      let mut task = Task::new(TaskTitle::new("旧タイトル").unwrap(), true);
      let patch = TaskPatch {
         title:        Some(TaskTitle::new("新タイトル").unwrap()),
         is_completed: None,
      };

      task.apply_patch(&patch);

      assert_eq!(task.title().as_str(), "新タイトル");
      assert!(task.is_completed());
   }

   #[test]
   fn test_apply_patchが完了フラグのみ置き換える() {
      let mut task = Task::new(TaskTitle::new("買い物").unwrap(), false);
      let patch = TaskPatch {
         title:        None,
         is_completed: Some(true),
      };

      task.apply_patch(&patch);

      assert_eq!(task.title().as_str(), "買い物");
      assert!(task.is_completed());
   }

   #[test]
   fn test_空のパッチは何も変更しない() {
      let mut task = Task::new(TaskTitle::new("買い物").unwrap(), false);
      let before = task.clone();
      let patch = TaskPatch::default();

      assert!(patch.is_empty());
      task.apply_patch(&patch);

      assert_eq!(task, before);
   }
}
