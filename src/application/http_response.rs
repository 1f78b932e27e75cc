// API Gatewayプロキシ統合レスポンス
//
// `{statusCode, headers, body}`形式のレスポンスを構築する。
// 全てのレスポンスに同一のCORSヘッダーを付与する。

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::ResponseBody;

/// Access-Control-Allow-Headersの値
pub const CORS_ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";

/// Access-Control-Allow-Methodsの値
pub const CORS_ALLOW_METHODS: &str = "OPTIONS,POST";

/// Lambdaプロキシ統合レスポンス
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    /// HTTPステータスコード
    pub status_code: u16,
    /// レスポンスヘッダー
    pub headers: BTreeMap<String, String>,
    /// JSON文字列の本文
    pub body: String,
}

impl HttpResponse {
    /// ステータスコードと本文からレスポンスを作成
    pub fn new(status_code: u16, body: &ResponseBody) -> Self {
        Self {
            status_code,
            headers: Self::build_cors_headers(),
            body: body.to_json(),
        }
    }

    /// プリフライト応答（200, `{"mensagem":"OK"}`）
    pub fn preflight() -> Self {
        Self::new(200, &ResponseBody::Preflight)
    }

    /// 受付完了応答
    pub fn success() -> Self {
        Self::new(200, &ResponseBody::Success)
    }

    /// エラー応答
    pub fn failure(status_code: u16, message: impl Into<String>) -> Self {
        Self::new(status_code, &ResponseBody::Failure(message.into()))
    }

    /// CORSヘッダーを生成
    ///
    /// - Content-Type: application/json
    /// - Access-Control-Allow-Origin: *
    /// - Access-Control-Allow-Headers: Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token
    /// - Access-Control-Allow-Methods: OPTIONS,POST
    pub fn build_cors_headers() -> BTreeMap<String, String> {
        [
            ("Content-Type", "application/json"),
            ("Access-Control-Allow-Origin", "*"),
            ("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS),
            ("Access-Control-Allow-Methods", CORS_ALLOW_METHODS),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
    }
}
