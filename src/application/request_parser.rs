// API Gatewayイベントからのリクエスト情報抽出
//
// REST API（ペイロード1.0）とHTTP API（ペイロード2.0）の両方の
// イベント形式に対応する。
use serde_json::{Map, Value};

use super::intake_handler::IntakeError;

/// CORSプリフライトのHTTPメソッド
pub const PREFLIGHT_METHOD: &str = "OPTIONS";

/// リクエストパーサー
pub struct RequestParser;

impl RequestParser {
    /// HTTPメソッドを取得
    ///
    /// ペイロード1.0の`httpMethod`を優先し、なければ
    /// ペイロード2.0の`requestContext.http.method`を参照する。
    pub fn http_method(event: &Value) -> Option<&str> {
        event
            .get("httpMethod")
            .and_then(|v| v.as_str())
            .filter(|m| !m.is_empty())
            .or_else(|| {
                event
                    .get("requestContext")
                    .and_then(|ctx| ctx.get("http"))
                    .and_then(|http| http.get("method"))
                    .and_then(|v| v.as_str())
            })
    }

    /// プリフライトリクエストかどうか
    pub fn is_preflight(event: &Value) -> bool {
        Self::http_method(event) == Some(PREFLIGHT_METHOD)
    }

    /// リクエスト本文をJSONオブジェクトとして取得
    ///
    /// # エラー
    /// * `EmptyBody` - `body`が存在しない、`null`、または空文字列
    /// * `BodyNotString` - `body`が文字列でない
    /// * `InvalidJson` - JSONとしてパースできない
    /// * `BodyNotObject` - JSONがオブジェクトでない
    pub fn parse_form(event: &Value) -> Result<Map<String, Value>, IntakeError> {
        let body = match event.get("body") {
            None | Some(Value::Null) => return Err(IntakeError::EmptyBody),
            Some(Value::String(body)) if body.is_empty() => return Err(IntakeError::EmptyBody),
            Some(Value::String(body)) => body,
            Some(_) => return Err(IntakeError::BodyNotString),
        };

        let parsed: Value =
            serde_json::from_str(body).map_err(|e| IntakeError::InvalidJson(e.to_string()))?;

        match parsed {
            Value::Object(form) => Ok(form),
            _ => Err(IntakeError::BodyNotObject),
        }
    }
}
