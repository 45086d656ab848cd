//! # API エラー定義
//!
//! API で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## 設計方針
//!
//! すべてのハンドラは `Result<_, ApiError>` を返し、ステータスコードと
//! エラーボディの組み立てはこの `IntoResponse` 実装に一元化する。
//! ハンドラ内で個別にエラーレスポンスを組み立てることはしない。
//!
//! ## エラー種別とステータスの対応
//!
//! | バリアント | HTTP ステータス | ボディの message |
//! |-----------|----------------|-----------------|
//! | `Validation` | 400 | 最初に失敗した検証ルールの詳細 |
//! | `NotFound` | 404 | 固定値 `"Not Found"` |
//! | `Store` | 500 | 固定値 `"Unknown Error"`（詳細はログのみ） |

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use taskflow_domain::DomainError;
use taskflow_infra::InfraError;
use taskflow_shared::ErrorBody;
use thiserror::Error;

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// 入力値の検証失敗
   ///
   /// メッセージはそのままエラーボディの `message` に使われる。
   #[error("validation failed: {0}")]
   Validation(String),

   /// リソースが見つからない
   ///
   /// ペイロードはログ用の内部的な説明で、クライアントには
   /// 固定メッセージのみ返す。
   #[error("resource not found: {0}")]
   NotFound(String),

   /// ストアエラー
   #[error("store error: {0}")]
   Store(#[from] InfraError),
}

impl From<DomainError> for ApiError {
   /// ドメインの検証エラーを 400 系エラーに変換する
   ///
   /// カテゴリ接頭辞を除いた素のメッセージをボディに載せる。
   fn from(e: DomainError) -> Self {
      Self::Validation(e.detail().to_string())
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, body) = match self {
         ApiError::Validation(detail) => (StatusCode::BAD_REQUEST, ErrorBody::bad_request(detail)),
         ApiError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorBody::not_found()),
         ApiError::Store(e) => {
            // 下層の詳細はログに残し、クライアントには渡さない
            tracing::error!(error = %e, span_trace = %e.span_trace(), "ストアエラーが発生しました");
            (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::unknown())
         }
      };

      (status, Json(body)).into_response()
   }
}
