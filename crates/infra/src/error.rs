//! # インフラ層エラー定義
//!
//! ドキュメントストアとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **エラーの変換**: mongodb::error::Error をラップ
//! - **ドメインエラーとの分離**: インフラ固有のエラーを明示
//! - **SpanTrace 自動捕捉**: `From` 実装や convenience constructor で
//!   エラー生成時の呼び出し経路を自動記録する
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（Database, InvalidDocument 等）

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別（[`InfraErrorKind`]）と [`SpanTrace`]（呼び出し経路）を保持する。
/// `From<mongodb::error::Error>` の変換や convenience constructor でエラーを
/// 生成すると、その時点のスパン情報が自動的にキャプチャされる。
///
/// API 層はこのエラーを一律 500 に変換し、詳細はログにのみ残す。
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
   kind:       InfraErrorKind,
   span_trace: SpanTrace,
}

/// インフラ層エラーの種別
///
/// ドキュメントストアへのクエリで発生するエラーの具体的な種別。
#[derive(Debug, Error)]
pub enum InfraErrorKind {
   /// ストアエラー
   ///
   /// 接続失敗、クエリ実行失敗、タイムアウトなど。
   #[error("database error: {0}")]
   Database(#[source] mongodb::error::Error),

   /// 不正なドキュメント
   ///
   /// ストアから取得したドキュメントがドメインの不変条件を満たさない
   /// 場合に使用する（例: 空タイトル）。
   #[error("invalid document: {0}")]
   InvalidDocument(String),

   /// 予期しないエラー
   ///
   /// 上記に分類できない予期しないエラー。
   #[error("unexpected error: {0}")]
   Unexpected(String),
}

// ===== InfraError のメソッド =====

impl InfraError {
   /// エラー種別を取得する
   pub fn kind(&self) -> &InfraErrorKind {
      &self.kind
   }

   /// SpanTrace を取得する
   pub fn span_trace(&self) -> &SpanTrace {
      &self.span_trace
   }

   // ===== Convenience constructors =====

   /// 不正ドキュメントエラーを生成する
   pub fn invalid_document(msg: impl Into<String>) -> Self {
      Self {
         kind:       InfraErrorKind::InvalidDocument(msg.into()),
         span_trace: SpanTrace::capture(),
      }
   }

   /// 予期しないエラーを生成する
   pub fn unexpected(msg: impl Into<String>) -> Self {
      Self {
         kind:       InfraErrorKind::Unexpected(msg.into()),
         span_trace: SpanTrace::capture(),
      }
   }
}

// ===== トレイト実装 =====

impl fmt::Debug for InfraError {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("InfraError")
         .field("kind", &self.kind)
         .field("span_trace", &self.span_trace)
         .finish()
   }
}

impl std::error::Error for InfraError {
   fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
      self.kind.source()
   }
}

// ===== From 実装（SpanTrace 自動キャプチャ） =====

impl From<mongodb::error::Error> for InfraError {
   fn from(source: mongodb::error::Error) -> Self {
      Self {
         kind:       InfraErrorKind::Database(source),
         span_trace: SpanTrace::capture(),
      }
   }
}

#[cfg(test)]
mod tests {
   use tracing_subscriber::layer::SubscriberExt as _;

   use super::*;

   /// テスト用に ErrorLayer 付き subscriber を設定する
   fn with_error_layer(f: impl FnOnce()) {
      let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
      let _guard = tracing::subscriber::set_default(subscriber);
      f();
   }

   // ===== From 実装のテスト =====

   #[test]
   fn test_from_mongodb_errorでspan_traceがキャプチャされる() {
      with_error_layer(|| {
         let span = tracing::info_span!("test_repo", collection = "tasks");
         let _enter = span.enter();

         let driver_err: mongodb::error::Error = std::io::Error::other("connection reset").into();
         let err: InfraError = driver_err.into();

         assert!(matches!(err.kind(), InfraErrorKind::Database(_)));
         let trace_str = format!("{}", err.span_trace());
         assert!(
            trace_str.contains("test_repo"),
            "SpanTrace がスパン名を含むこと: {trace_str}",
         );
      });
   }

   // ===== Convenience constructor のテスト =====

   #[test]
   fn test_invalid_documentでspan_traceがキャプチャされる() {
      with_error_layer(|| {
         let span = tracing::info_span!("test_conversion");
         let _enter = span.enter();

         let err = InfraError::invalid_document("title must not be empty");

         assert!(matches!(
            err.kind(),
            InfraErrorKind::InvalidDocument(msg) if msg == "title must not be empty"
         ));
         let trace_str = format!("{}", err.span_trace());
         assert!(trace_str.contains("test_conversion"));
      });
   }

   #[test]
   fn test_unexpectedでエラー種別が設定される() {
      with_error_layer(|| {
         let err = InfraError::unexpected("mock store failure");
         assert!(matches!(
            err.kind(),
            InfraErrorKind::Unexpected(msg) if msg == "mock store failure"
         ));
      });
   }

   // ===== Display / source のテスト =====

   #[test]
   fn test_displayがinfra_error_kindのメッセージを出力する() {
      let err = InfraError::invalid_document("bad title");
      assert_eq!(format!("{err}"), "invalid document: bad title");
   }

   #[test]
   fn test_sourceがinfra_error_kindに委譲する() {
      use std::error::Error;

      let driver_err: mongodb::error::Error = std::io::Error::other("boom").into();
      let err: InfraError = driver_err.into();

      // Database バリアントは mongodb::error::Error を source として持つ
      assert!(err.source().is_some());
   }
}
