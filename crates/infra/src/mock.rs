//! # テスト用モックリポジトリ
//!
//! ルーターレベルの統合テストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! taskflow-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use taskflow_domain::task::{Task, TaskId, TaskPatch};

use crate::{error::InfraError, repository::TaskRepository};

/// インメモリ実装の TaskRepository
///
/// 挿入順を保持した `Vec` をストアとして使い、`find_page` の
/// skip / limit もストアと同じ意味論で適用する。
///
/// [`failing`](MockTaskRepository::failing) で構築すると全操作が
/// ストアエラーを返し、500 経路のテストに使える。
#[derive(Clone, Default)]
pub struct MockTaskRepository {
   tasks: Arc<Mutex<Vec<Task>>>,
   fail:  bool,
}

impl MockTaskRepository {
   pub fn new() -> Self {
      Self::default()
   }

   /// 全操作が失敗するリポジトリを作成する
   pub fn failing() -> Self {
      Self {
         tasks: Arc::new(Mutex::new(Vec::new())),
         fail:  true,
      }
   }

   /// テストデータを直接投入する
   pub fn add_task(&self, task: Task) {
      self.tasks.lock().unwrap().push(task);
   }

   fn check_failure(&self) -> Result<(), InfraError> {
      if self.fail {
         return Err(InfraError::unexpected("mock store failure"));
      }
      Ok(())
   }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
   async fn find_page(&self, limit: i64, skip: u64) -> Result<Vec<Task>, InfraError> {
      self.check_failure()?;
      Ok(self
         .tasks
         .lock()
         .unwrap()
         .iter()
         .skip(skip as usize)
         .take(limit.unsigned_abs() as usize)
         .cloned()
         .collect())
   }

   async fn count(&self) -> Result<u64, InfraError> {
      self.check_failure()?;
      Ok(self.tasks.lock().unwrap().len() as u64)
   }

   async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, InfraError> {
      self.check_failure()?;
      Ok(self
         .tasks
         .lock()
         .unwrap()
         .iter()
         .find(|t| t.id() == id)
         .cloned())
   }

   async fn insert(&self, task: &Task) -> Result<(), InfraError> {
      self.check_failure()?;
      self.tasks.lock().unwrap().push(task.clone());
      Ok(())
   }

   async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<Option<Task>, InfraError> {
      self.check_failure()?;
      let mut tasks = self.tasks.lock().unwrap();

      let Some(task) = tasks.iter_mut().find(|t| t.id() == id) else {
         return Ok(None);
      };

      task.apply_patch(patch);
      Ok(Some(task.clone()))
   }

   async fn delete(&self, id: &TaskId) -> Result<(), InfraError> {
      self.check_failure()?;
      self.tasks.lock().unwrap().retain(|t| t.id() != id);
      Ok(())
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use taskflow_domain::task::TaskTitle;

   use super::*;

   fn task(title: &str) -> Task {
      Task::new(TaskTitle::new(title).unwrap(), false)
   }

   #[tokio::test]
   async fn test_find_pageがskipとlimitを適用する() {
      let repo = MockTaskRepository::new();
      repo.add_task(task("a"));
      repo.add_task(task("b"));
      repo.add_task(task("c"));

      let page = repo.find_page(1, 1).await.unwrap();

      assert_eq!(page.len(), 1);
      assert_eq!(page[0].title().as_str(), "b");
   }

   #[tokio::test]
   async fn test_countはページングの影響を受けない() {
      let repo = MockTaskRepository::new();
      repo.add_task(task("a"));
      repo.add_task(task("b"));

      assert_eq!(repo.count().await.unwrap(), 2);
   }

   #[tokio::test]
   async fn test_updateが存在しないidでnoneを返す() {
      let repo = MockTaskRepository::new();

      let result = repo.update(&TaskId::new(), &TaskPatch::default()).await;

      assert!(result.unwrap().is_none());
   }

   #[tokio::test]
   async fn test_deleteは存在しないidでも成功する() {
      let repo = MockTaskRepository::new();

      assert!(repo.delete(&TaskId::new()).await.is_ok());
   }

   #[tokio::test]
   async fn test_failingは全操作でエラーを返す() {
      let repo = MockTaskRepository::failing();

      assert!(repo.count().await.is_err());
      assert!(repo.find_page(50, 0).await.is_err());
      assert!(repo.find_by_id(&TaskId::new()).await.is_err());
      assert!(repo.delete(&TaskId::new()).await.is_err());
   }
}
