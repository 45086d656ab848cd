//! # エラーレスポンスボディ
//!
//! 全エンドポイント共通のエラーレスポンス構造体を提供する。
//!
//! ## 設計
//!
//! - `ErrorBody` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は api クレートの責務（shared に axum 依存を入れない）
//! - よく使うエラー種別は便利コンストラクタで提供し、固定メッセージのハードコードを排除
//!
//! ## JSON 形式
//!
//! ```json
//! {
//!   "code": 404,
//!   "message": "Not Found"
//! }
//! ```
//!
//! `code` は HTTP ステータスコードをミラーした数値。

use serde::{Deserialize, Serialize};

/// リソース・ルート不在時の固定メッセージ
const NOT_FOUND_MESSAGE: &str = "Not Found";

/// ストア障害など予期しない失敗時の固定メッセージ
///
/// 下層のエラー詳細はログに残し、クライアントには渡さない。
const UNKNOWN_MESSAGE: &str = "Unknown Error";

/// エラーレスポンスボディ
///
/// すべてのエラーレスポンスはこの `{code, message}` 形式で返す。
/// `code` は HTTP ステータスと同じ値、`message` は人間可読な説明文。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code:    u16,
    pub message: String,
}

impl ErrorBody {
    /// 汎用コンストラクタ
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// 400 Bad Request
    ///
    /// `detail` には最初に失敗した検証ルールのメッセージを渡す。
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, detail)
    }

    /// 404 Not Found（レコード不在・未定義ルート共通）
    pub fn not_found() -> Self {
        Self::new(404, NOT_FOUND_MESSAGE)
    }

    /// 500 Internal Server Error（詳細はログのみ）
    pub fn unknown() -> Self {
        Self::new(500, UNKNOWN_MESSAGE)
    }
}
