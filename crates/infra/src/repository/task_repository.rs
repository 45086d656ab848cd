//! # TaskRepository
//!
//! タスクレコードの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ドキュメント変換の一元化**: ストア表現（[`TaskDocument`]）と
//!   ドメインエンティティの変換はこのモジュールに閉じる
//! - **部分更新は `$set`**: 指定されたフィールドのみを書き換え、
//!   未指定フィールドはストア上の値を保持する
//! - **競合制御なし**: 同一レコードへの並行書き込みは last-write-wins

use async_trait::async_trait;
use bson::{Document, doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::{Collection, Database, options::ReturnDocument};
use serde::{Deserialize, Serialize};
use taskflow_domain::task::{Task, TaskId, TaskPatch, TaskTitle};

use crate::error::InfraError;

/// タスクを格納するコレクション名
const TASKS_COLLECTION: &str = "tasks";

/// タスクリポジトリトレイト
///
/// タスクレコードの永続化操作を定義する。
/// インフラ層で具体的な実装を提供し、ハンドラから利用する。
#[async_trait]
pub trait TaskRepository: Send + Sync {
   /// タスクの一覧ページを取得する
   ///
   /// `skip` 件読み飛ばした位置から最大 `limit` 件を返す。
   /// 並び順はストアの自然順（挿入順）に従う。
   async fn find_page(&self, limit: i64, skip: u64) -> Result<Vec<Task>, InfraError>;

   /// 全タスク件数を取得する
   ///
   /// `limit` / `skip` の影響を受けない総数を返す。
   async fn count(&self) -> Result<u64, InfraError>;

   /// ID でタスクを検索する
   ///
   /// # 戻り値
   ///
   /// - `Ok(Some(task))`: タスクが見つかった場合
   /// - `Ok(None)`: タスクが見つからない場合
   /// - `Err(_)`: ストアエラー
   async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, InfraError>;

   /// タスクを挿入する
   async fn insert(&self, task: &Task) -> Result<(), InfraError>;

   /// タスクを部分更新し、更新後の状態を返す
   ///
   /// パッチに含まれるフィールドのみを書き換える。対象レコードが
   /// 存在しない場合（ルックアップ後に並行削除された場合を含む）は
   /// `Ok(None)` を返す。
   async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<Option<Task>, InfraError>;

   /// タスクを削除する
   ///
   /// 冪等: 対象レコードが存在しなくてもエラーにしない。
   async fn delete(&self, id: &TaskId) -> Result<(), InfraError>;
}

/// タスクのストア表現
///
/// フィールド名は永続化されるドキュメントのキーに一致させる
/// （`_id`, `title`, `isCompleted`）。
#[derive(Debug, Serialize, Deserialize)]
struct TaskDocument {
   #[serde(rename = "_id")]
   id:           ObjectId,
   title:        String,
   #[serde(rename = "isCompleted")]
   is_completed: bool,
}

impl TaskDocument {
   fn from_task(task: &Task) -> Self {
      Self {
         id:           *task.id().as_object_id(),
         title:        task.title().as_str().to_string(),
         is_completed: task.is_completed(),
      }
   }

   /// ドメインエンティティに変換する
   ///
   /// ストア上のドキュメントがドメインの不変条件（非空タイトル）を
   /// 満たさない場合は `InvalidDocument` エラーになる。
   fn into_task(self) -> Result<Task, InfraError> {
      let title =
         TaskTitle::new(self.title).map_err(|e| InfraError::invalid_document(e.to_string()))?;

      Ok(Task::from_db(
         TaskId::from_object_id(self.id),
         title,
         self.is_completed,
      ))
   }
}

/// MongoDB 実装の TaskRepository
#[derive(Debug, Clone)]
pub struct MongoTaskRepository {
   collection: Collection<TaskDocument>,
}

impl MongoTaskRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(database: &Database) -> Self {
      Self {
         collection: database.collection(TASKS_COLLECTION),
      }
   }
}

#[async_trait]
impl TaskRepository for MongoTaskRepository {
   async fn find_page(&self, limit: i64, skip: u64) -> Result<Vec<Task>, InfraError> {
      let cursor = self.collection.find(doc! {}).skip(skip).limit(limit).await?;
      let documents: Vec<TaskDocument> = cursor.try_collect().await?;

      documents.into_iter().map(TaskDocument::into_task).collect()
   }

   async fn count(&self) -> Result<u64, InfraError> {
      Ok(self.collection.count_documents(doc! {}).await?)
   }

   async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, InfraError> {
      let document = self
         .collection
         .find_one(doc! { "_id": *id.as_object_id() })
         .await?;

      document.map(TaskDocument::into_task).transpose()
   }

   async fn insert(&self, task: &Task) -> Result<(), InfraError> {
      self.collection.insert_one(TaskDocument::from_task(task)).await?;
      Ok(())
   }

   async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<Option<Task>, InfraError> {
      // 空パッチで `$set: {}` を発行するとストアがエラーを返すため、
      // 変更なしの場合は現在の状態をそのまま返す
      if patch.is_empty() {
         return self.find_by_id(id).await;
      }

      let mut set = Document::new();
      if let Some(title) = &patch.title {
         set.insert("title", title.as_str());
      }
      if let Some(is_completed) = patch.is_completed {
         set.insert("isCompleted", is_completed);
      }

      let updated = self
         .collection
         .find_one_and_update(doc! { "_id": *id.as_object_id() }, doc! { "$set": set })
         .return_document(ReturnDocument::After)
         .await?;

      updated.map(TaskDocument::into_task).transpose()
   }

   async fn delete(&self, id: &TaskId) -> Result<(), InfraError> {
      self.collection
         .delete_one(doc! { "_id": *id.as_object_id() })
         .await?;
      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   // ===== TaskDocument 変換のテスト =====

   #[test]
   fn test_from_taskがフィールドを写し取る() {
      let task = Task::new(TaskTitle::new("牛乳を買う").unwrap(), true);

      let document = TaskDocument::from_task(&task);

      assert_eq!(&document.id, task.id().as_object_id());
      assert_eq!(document.title, "牛乳を買う");
      assert!(document.is_completed);
   }

   #[test]
   fn test_into_taskで元のタスクに戻る() {
      let task = Task::new(TaskTitle::new("掃除").unwrap(), false);

      let restored = TaskDocument::from_task(&task).into_task().unwrap();

      assert_eq!(restored, task);
   }

   #[test]
   fn test_into_taskが空タイトルのドキュメントを拒否する() {
      let document = TaskDocument {
         id:           ObjectId::new(),
         title:        String::new(),
         is_completed: false,
      };

      let result = document.into_task();

      assert!(result.is_err());
   }

   #[test]
   fn test_serializeがストアのフィールド名を使う() {
      let task = Task::new(TaskTitle::new("買い物").unwrap(), false);
      let document = TaskDocument::from_task(&task);

      let bson_doc = bson::to_document(&document).unwrap();

      assert!(bson_doc.contains_key("_id"));
      assert!(bson_doc.contains_key("title"));
      assert!(bson_doc.contains_key("isCompleted"));
      assert!(!bson_doc.contains_key("is_completed"));
   }
}
