//! # タスク API ハンドラ
//!
//! タスクの CRUD エンドポイントを実装する。
//!
//! ## 設計方針
//!
//! - リクエストは型付き構造体で受け取り、エンドポイントごとの検証関数で
//!   検証済みの値（デフォルト適用済み）に変換してからストアに触る
//! - 識別子はパスパラメータの生文字列ではなく、検証済みの [`TaskId`] を
//!   ルックアップ・更新の両方で使う
//! - ボディのデコード失敗（不正な JSON、未知のフィールド、型違い）も
//!   検証エラーとして統一のエラーボディに変換する

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, Query, State, rejection::JsonRejection},
   http::StatusCode,
   response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use taskflow_domain::task::{Task, TaskId, TaskPatch, TaskTitle};
use taskflow_infra::repository::TaskRepository;
use taskflow_shared::ListResponse;

use crate::error::ApiError;

/// タスクハンドラーの State
///
/// プロセス起動時にエントリポイントが構築し、ルーターに注入する。
/// リポジトリ以外の共有可変状態は持たない。
pub struct TaskState<R> {
   pub repository: R,
}

/// 一覧取得のデフォルト件数
const DEFAULT_LIMIT: i64 = 50;

/// 一覧取得のデフォルト読み飛ばし件数
const DEFAULT_SKIP: u64 = 0;

// ===== DTO =====

/// タスクのレスポンス表現
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
   pub id:           String,
   pub title:        String,
   pub is_completed: bool,
}

impl TaskDto {
   fn from_task(task: &Task) -> Self {
      Self {
         id:           task.id().to_string(),
         title:        task.title().as_str().to_string(),
         is_completed: task.is_completed(),
      }
   }
}

// ===== リクエスト型と検証 =====

/// 一覧取得のクエリパラメータ（検証前）
///
/// 数値検証を自前のメッセージで行うため、文字列のまま受け取る。
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksQuery {
   pub limit: Option<String>,
   pub skip:  Option<String>,
}

/// 一覧取得の検証済みパラメータ
///
/// デフォルト値はこの構造体への変換時に確定的に適用される。
#[derive(Debug, PartialEq, Eq)]
pub struct ListParams {
   pub limit: i64,
   pub skip:  u64,
}

impl ListParams {
   /// クエリパラメータを検証する
   ///
   /// 最初に失敗したルールのメッセージがエラーボディに載る。
   fn parse(query: ListTasksQuery) -> Result<Self, ApiError> {
      let limit = match query.limit {
         Some(raw) => raw
            .parse()
            .map_err(|_| ApiError::Validation("limit must be an integer".to_string()))?,
         None => DEFAULT_LIMIT,
      };

      let skip = match query.skip {
         Some(raw) => raw.parse().map_err(|_| {
            ApiError::Validation("skip must be a non-negative integer".to_string())
         })?,
         None => DEFAULT_SKIP,
      };

      Ok(Self { limit, skip })
   }
}

/// タスク作成のリクエストボディ（検証前）
///
/// `title` の必須チェックを検証関数に寄せるため、フィールドは
/// すべて Optional で受ける。未知のフィールドはデコード時に拒否する。
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CreateTaskRequest {
   pub title:        Option<String>,
   pub is_completed: Option<bool>,
}

/// タスク作成の検証済み入力
#[derive(Debug)]
pub struct CreateTaskInput {
   pub title:        TaskTitle,
   pub is_completed: bool,
}

impl CreateTaskRequest {
   /// リクエストを検証し、デフォルト値を適用する
   fn validate(self) -> Result<CreateTaskInput, ApiError> {
      let title = self
         .title
         .ok_or_else(|| ApiError::Validation("title is required".to_string()))?;

      Ok(CreateTaskInput {
         title:        TaskTitle::new(title)?,
         is_completed: self.is_completed.unwrap_or(false),
      })
   }
}

/// タスク更新のリクエストボディ（検証前）
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct UpdateTaskRequest {
   pub title:        Option<String>,
   pub is_completed: Option<bool>,
}

impl UpdateTaskRequest {
   /// リクエストを検証し、部分更新パッチに変換する
   ///
   /// 両フィールドとも未指定の空パッチも有効（レコードは変更されない）。
   fn validate(self) -> Result<TaskPatch, ApiError> {
      Ok(TaskPatch {
         title:        self.title.map(TaskTitle::new).transpose()?,
         is_completed: self.is_completed,
      })
   }
}

// ===== ハンドラ =====

/// タスク一覧を取得する
///
/// ## エンドポイント
/// GET /api/tasks?limit={limit}&skip={skip}
///
/// `count` はページングを無視した全件数。ページと件数の取得は
/// 並行して実行する。
pub async fn list_tasks<R: TaskRepository>(
   State(state): State<Arc<TaskState<R>>>,
   Query(query): Query<ListTasksQuery>,
) -> Result<Response, ApiError> {
   let params = ListParams::parse(query)?;

   let (tasks, count) = tokio::try_join!(
      state.repository.find_page(params.limit, params.skip),
      state.repository.count(),
   )?;

   let response = ListResponse::new(tasks.iter().map(TaskDto::from_task).collect(), count);

   Ok((StatusCode::OK, Json(response)).into_response())
}

/// タスクを取得する
///
/// ## エンドポイント
/// GET /api/tasks/{id}
pub async fn get_task<R: TaskRepository>(
   State(state): State<Arc<TaskState<R>>>,
   Path(id): Path<String>,
) -> Result<Response, ApiError> {
   let id = TaskId::parse_str(&id)?;

   let task = state
      .repository
      .find_by_id(&id)
      .await?
      .ok_or_else(|| ApiError::NotFound(format!("task {id}")))?;

   Ok((StatusCode::OK, Json(TaskDto::from_task(&task))).into_response())
}

/// タスクを作成する
///
/// ## エンドポイント
/// POST /api/tasks
///
/// 識別子はこの時点で発番され、レスポンスに含まれる。
/// ステータスは既存の規約に合わせて 200 を返す（201 ではない）。
pub async fn create_task<R: TaskRepository>(
   State(state): State<Arc<TaskState<R>>>,
   payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
   let Json(request) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
   let input = request.validate()?;

   let task = Task::new(input.title, input.is_completed);
   state.repository.insert(&task).await?;

   Ok((StatusCode::OK, Json(TaskDto::from_task(&task))).into_response())
}

/// タスクを部分更新する
///
/// ## エンドポイント
/// PATCH /api/tasks/{id}
///
/// 対象が存在することを先に確認し、存在しなければ何も書き換えずに
/// 404 を返す。指定されたフィールドのみ置き換える。
pub async fn update_task<R: TaskRepository>(
   State(state): State<Arc<TaskState<R>>>,
   Path(id): Path<String>,
   payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
   let id = TaskId::parse_str(&id)?;
   let Json(request) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
   let patch = request.validate()?;

   if state.repository.find_by_id(&id).await?.is_none() {
      return Err(ApiError::NotFound(format!("task {id}")));
   }

   // 存在確認と更新の間に並行削除されたレコードも 404 に倒す
   let updated = state
      .repository
      .update(&id, &patch)
      .await?
      .ok_or_else(|| ApiError::NotFound(format!("task {id}")))?;

   Ok((StatusCode::OK, Json(TaskDto::from_task(&updated))).into_response())
}

/// タスクを削除する
///
/// ## エンドポイント
/// DELETE /api/tasks/{id}
///
/// 冪等: 対象が存在しなくても、ストアへの削除要求が成功すれば
/// 204 を返す。
pub async fn delete_task<R: TaskRepository>(
   State(state): State<Arc<TaskState<R>>>,
   Path(id): Path<String>,
) -> Result<Response, ApiError> {
   let id = TaskId::parse_str(&id)?;

   state.repository.delete(&id).await?;

   Ok(StatusCode::NO_CONTENT.into_response())
}
