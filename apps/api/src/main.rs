//! # Taskflow API サーバー
//!
//! タスクレコードの CRUD を提供する HTTP サービス。
//!
//! ## 役割
//!
//! - **リクエスト検証**: クエリ・ボディ・パスパラメータの形式チェック
//! - **データ永続化**: ドキュメントストア（MongoDB）へのタスク保存
//! - **ステータスマッピング**: 検証・ストアの結果を HTTP ステータスに変換
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `MONGO_URL` | No | ストア接続 URL（デフォルト: `mongodb://127.0.0.1:27017/todo`） |
//! | `LOG_FORMAT` | No | ログ出力形式（`json` / `pretty`、デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベル（デフォルト: `info,taskflow=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p taskflow-api
//!
//! # 本番環境
//! API_PORT=3000 MONGO_URL=mongodb://... cargo run -p taskflow-api --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use taskflow_api::{app_builder::build_app, config::ApiConfig, handler::TaskState};
use taskflow_infra::{db, repository::MongoTaskRepository};
use taskflow_shared::observability::{self, TracingConfig};
use tokio::net::TcpListener;
use tracing::Instrument as _;

/// API サーバーのエントリーポイント
///
/// トレーシングを初期化し、サービス名を持つルートスパンの中で
/// [`run`] を実行する。JSON ログではこのスパンが `span.service`
/// として全行に付与される。
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   let tracing_config = TracingConfig::from_env("api");
   observability::init_tracing(&tracing_config);

   let root_span = tracing::info_span!("app", service = %tracing_config.service_name);

   run().instrument(root_span).await
}

/// 設定読み込みからサーバー起動までを実行する
///
/// ストア接続はここで一度だけ確立し、リポジトリとしてルーターに
/// 注入する。
async fn run() -> anyhow::Result<()> {
   // 設定読み込み
   let config = ApiConfig::from_env();

   tracing::info!(
      "API サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   // ドキュメントストアに接続
   let database = db::connect(&config.mongo_url).await?;

   // 依存コンポーネントを初期化してルーターに注入
   let repository = MongoTaskRepository::new(&database);
   let state = Arc::new(TaskState { repository });
   let app = build_app(state);

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
   let listener = TcpListener::bind(addr).await?;
   tracing::info!("API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
