//! # API サーバー設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//!
//! すべての変数にローカル開発向けのデフォルト値があり、
//! 環境変数なしでも起動できる。

use std::env;

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host:      String,
    /// ポート番号
    pub port:      u16,
    /// ドキュメントストア接続 URL
    pub mongo_url: String,
}

/// デフォルトのリッスンポート
const DEFAULT_PORT: &str = "3000";

/// デフォルトのストア接続 URL（ローカル MongoDB の todo データベース）
const DEFAULT_MONGO_URL: &str = "mongodb://127.0.0.1:27017/todo";

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Self {
        Self {
            host:      env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port:      env::var("API_PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .expect("API_PORT は有効なポート番号である必要があります"),
            mongo_url: env::var("MONGO_URL").unwrap_or_else(|_| DEFAULT_MONGO_URL.to_string()),
        }
    }
}
