//! # ドメイン層エラー定義
//!
//! 入力値の検証失敗など、ドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗（空タイトル、不正な識別子） |

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// 値オブジェクトの構築時に発生する検証エラーを表現する。
/// API 層でこのエラーを受け取り、400 レスポンスに変換する。
///
/// メッセージ（`{0}`）はそのままクライアントに返されるため、
/// 最初に失敗した検証ルールを説明する文にする。
#[derive(Debug, Error)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// # 例
   ///
   /// - 必須フィールドが未入力
   /// - 識別子が ObjectId 形式でない
   #[error("validation error: {0}")]
   Validation(String),
}

impl DomainError {
   /// 検証エラーの詳細メッセージを取得する
   ///
   /// API 層が `{code, message}` のエラーボディを組み立てる際に、
   /// カテゴリ接頭辞を除いた素のメッセージを使うためのアクセサ。
   pub fn detail(&self) -> &str {
      match self {
         DomainError::Validation(msg) => msg,
      }
   }
}
