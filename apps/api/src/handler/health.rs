//! # ヘルスチェックハンドラ
//!
//! API の稼働状態を確認するためのエンドポイント。
//!
//! ## エンドポイント
//!
//! ```text
//! GET /        — 疎通確認用の固定メッセージ
//! GET /health  — ロードバランサー / オーケストレーター向けヘルスチェック
//! ```

use axum::Json;
use serde::Serialize;
use taskflow_shared::HealthResponse;

/// 疎通確認レスポンス
#[derive(Debug, Serialize)]
pub struct MessageResponse {
   pub message: String,
}

/// ルートエンドポイント
///
/// サービスの疎通確認に使う固定メッセージを返す。
pub async fn hello() -> Json<MessageResponse> {
   Json(MessageResponse {
      message: "Hello World".to_string(),
   })
}

/// ヘルスチェックエンドポイント
///
/// サーバーが正常に稼働していることを確認するためのエンドポイント。
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse {
      status:  "healthy".to_string(),
      version: env!("CARGO_PKG_VERSION").to_string(),
   })
}
