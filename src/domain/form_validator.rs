// お問い合わせフォームの必須項目バリデーション
use serde_json::{Map, Value};
use thiserror::Error;

use super::form_field::FormField;

/// フォーム検証エラー
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormValidationError {
    /// 必須項目がキー・エイリアスのどちらにも入力されていない
    ///
    /// メッセージにはポルトガル語のフィールド名を含める。
    #[error("Campo obrigatório ausente: {0}")]
    MissingField(&'static str),
}

/// 必須項目バリデータ
pub struct FormValidator;

impl FormValidator {
    /// 必須項目（nome, email, mensagem の順）を検証する
    ///
    /// 最初に欠落が見つかったフィールドでエラーを返す。
    pub fn validate(form: &Map<String, Value>) -> Result<(), FormValidationError> {
        for field in FormField::REQUIRED {
            if field.lookup(form).is_none() {
                return Err(FormValidationError::MissingField(field.key()));
            }
        }

        Ok(())
    }
}
