//! # MongoDB 接続管理
//!
//! ドキュメントストアへのクライアント接続を確立する。
//!
//! ## 設計方針
//!
//! - **接続は起動時に一度**: アプリケーション起動時に一度だけ確立し、
//!   プロセス全体で共有する。通常運用での明示的な切断処理は持たない
//! - **ドライバ内蔵プール**: mongodb ドライバはコネクションプールを内蔵
//!   しており、リクエストごとの接続確立コストは発生しない
//! - **起動時疎通確認**: `ping` コマンドで接続を検証し、起動直後の
//!   設定ミス（不正な URL、ストア停止）を早期に検出する
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use taskflow_infra::db;
//!
//! let database = db::connect("mongodb://127.0.0.1:27017/todo").await?;
//! ```

use bson::doc;
use mongodb::{Client, Database};

use crate::error::InfraError;

/// 接続 URL にデータベース名が含まれない場合のフォールバック
const DEFAULT_DATABASE: &str = "todo";

/// ドキュメントストアに接続し、データベースハンドルを返す
///
/// # 引数
///
/// * `mongo_url` - MongoDB 接続 URL
///   - 形式: `mongodb://host:port/database`
///   - データベース名を省略した場合は `todo` を使用する
///
/// # 戻り値
///
/// 成功時は `Database`（クローンして共有可能なハンドル）を返す。
/// 失敗時は `InfraError` を返す（URL 不正、接続失敗など）。
pub async fn connect(mongo_url: &str) -> Result<Database, InfraError> {
   let client = Client::with_uri_str(mongo_url).await?;
   let database = client
      .default_database()
      .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

   // ドライバは遅延接続するため、ping で疎通を確認する
   database.run_command(doc! { "ping": 1 }).await?;

   tracing::info!(database = %database.name(), "ドキュメントストアに接続しました");

   Ok(database)
}
