// フォーム受付レスポンス本文
//
// クライアント（静的サイトのフォーム）に返すJSON本文と固定メッセージを定義する。

use serde_json::json;

/// プリフライト応答メッセージ
pub const MSG_PREFLIGHT_OK: &str = "OK";

/// 受付完了メッセージ
pub const MSG_SUCCESS: &str = "Obrigado! O Rotary Club da Guarda recebeu a sua mensagem.";

/// リクエスト本文が空の場合のメッセージ
pub const MSG_EMPTY_BODY: &str = "Corpo da requisição vazio";

/// 内部エラー時の汎用メッセージ（詳細はログのみに記録する）
pub const MSG_INTERNAL_ERROR: &str = "Erro interno ao processar a mensagem.";

/// 受付結果ステータス: 成功
pub const STATUS_SUCCESS: &str = "sucesso";

/// 受付結果ステータス: エラー
pub const STATUS_ERROR: &str = "erro";

/// レスポンス本文
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// `{"mensagem": "OK"}`
    Preflight,
    /// `{"status": "sucesso", "mensagem": <受付完了メッセージ>}`
    Success,
    /// `{"status": "erro", "mensagem": <メッセージ>}`
    Failure(String),
}

impl ResponseBody {
    /// JSON文字列にシリアライズ
    pub fn to_json(&self) -> String {
        let value = match self {
            ResponseBody::Preflight => json!({ "mensagem": MSG_PREFLIGHT_OK }),
            ResponseBody::Success => json!({
                "status": STATUS_SUCCESS,
                "mensagem": MSG_SUCCESS,
            }),
            ResponseBody::Failure(message) => json!({
                "status": STATUS_ERROR,
                "mensagem": message,
            }),
        };
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_preflight_body_literal() {
        assert_eq!(ResponseBody::Preflight.to_json(), r#"{"mensagem":"OK"}"#);
    }

    #[test]
    fn test_success_body() {
        let parsed: Value = serde_json::from_str(&ResponseBody::Success.to_json()).unwrap();
        assert_eq!(parsed["status"], "sucesso");
        assert_eq!(
            parsed["mensagem"],
            "Obrigado! O Rotary Club da Guarda recebeu a sua mensagem."
        );
    }

    #[test]
    fn test_failure_body() {
        let body = ResponseBody::Failure(MSG_EMPTY_BODY.to_string());
        let parsed: Value = serde_json::from_str(&body.to_json()).unwrap();
        assert_eq!(parsed["status"], "erro");
        assert_eq!(parsed["mensagem"], "Corpo da requisição vazio");
    }
}
