//! # API アプリケーション構築
//!
//! State の注入とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中し、統合テストは
//! この関数にモックリポジトリを渡して本番と同一のルーターを検証する。

use std::sync::Arc;

use axum::{
   Json,
   Router,
   http::StatusCode,
   response::{IntoResponse, Response},
   routing::get,
};
use taskflow_infra::repository::TaskRepository;
use taskflow_shared::ErrorBody;
use tower_http::trace::TraceLayer;

use crate::handler::{
   TaskState,
   create_task,
   delete_task,
   get_task,
   health_check,
   hello,
   list_tasks,
   update_task,
};

/// ルーターを構築する
///
/// リポジトリを持つ State を受け取り、全ルートとフォールバックを
/// 組み立てる。パス・メソッドのどちらで不一致でも 404 の
/// 標準エラーボディに落ちる（405 は返さない）。
pub fn build_app<R>(state: Arc<TaskState<R>>) -> Router
where
   R: TaskRepository + 'static,
{
   Router::new()
      .route("/", get(hello))
      .route("/health", get(health_check))
      .route("/api/tasks", get(list_tasks::<R>).post(create_task::<R>))
      .route(
         "/api/tasks/{id}",
         get(get_task::<R>)
            .patch(update_task::<R>)
            .delete(delete_task::<R>),
      )
      .fallback(fallback_not_found)
      .method_not_allowed_fallback(fallback_not_found)
      .with_state(state)
      .layer(TraceLayer::new_for_http())
}

/// 未定義ルートのフォールバックハンドラ
async fn fallback_not_found() -> Response {
   (StatusCode::NOT_FOUND, Json(ErrorBody::not_found())).into_response()
}
