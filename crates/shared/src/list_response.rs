//! # 一覧レスポンス
//!
//! オフセット・リミット方式の一覧取得に対応した API レスポンス型。

use serde::{Deserialize, Serialize};

/// 一覧レスポンス
///
/// `data` はページ適用後の要素、`count` は limit / skip を無視した
/// 全件数。クライアントはこの 2 つからページング UI を構築できる。
///
/// ## JSON 形式
///
/// ```json
/// {
///   "data": [...],
///   "count": 42
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data:  Vec<T>,
    pub count: u64,
}

impl<T> ListResponse<T> {
    /// 新しい `ListResponse` を作成する
    pub fn new(data: Vec<T>, count: u64) -> Self {
        Self { data, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializeを正しいjson形状にする() {
        let response = ListResponse::new(vec!["a", "b"], 5);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "data": ["a", "b"], "count": 5 }));
    }

    #[test]
    fn test_空の一覧でもcountを保持する() {
        let response: ListResponse<String> = ListResponse::new(Vec::new(), 0);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "data": [], "count": 0 }));
    }
}
