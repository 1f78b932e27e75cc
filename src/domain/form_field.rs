// フォーム項目定義
//
// 論理フィールドごとにポルトガル語キー・英語エイリアス・デフォルト値を
// 宣言的に保持し、単一のリゾルバーで送信値を解決するドメイン層コンポーネント。

use serde_json::{Map, Value};

/// 氏名・メール・電話番号が未入力の場合のデフォルト値
pub const DEFAULT_NOT_INFORMED: &str = "Não informado";

/// 件名が未入力の場合のデフォルト値
pub const DEFAULT_SUBJECT: &str = "Geral";

/// 本文が未入力の場合のデフォルト値
pub const DEFAULT_MESSAGE: &str = "";

/// お問い合わせフォームの論理フィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// 氏名 (nome / name)
    Name,
    /// メールアドレス (email)
    Email,
    /// 電話番号 (telefone / phone)
    Phone,
    /// 件名 (assunto / subject)
    Subject,
    /// 本文 (mensagem / message)
    Message,
}

impl FormField {
    /// 全フィールド（保存時の属性順）
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Subject,
        FormField::Message,
    ];

    /// 必須フィールド（検証順）
    pub const REQUIRED: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// ポルトガル語キー
    ///
    /// 保存時の属性名と、必須項目欠落時のエラーメッセージにも使用する。
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "nome",
            FormField::Email => "email",
            FormField::Phone => "telefone",
            FormField::Subject => "assunto",
            FormField::Message => "mensagem",
        }
    }

    /// 英語エイリアスキー
    pub fn alias(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    /// 未入力時のデフォルト値
    pub fn default_value(self) -> &'static str {
        match self {
            FormField::Name | FormField::Email | FormField::Phone => DEFAULT_NOT_INFORMED,
            FormField::Subject => DEFAULT_SUBJECT,
            FormField::Message => DEFAULT_MESSAGE,
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// キー、エイリアスの順に探索し、最初に見つかった有効値を返す
    ///
    /// 値が`null`・`false`・0・空文字列・空配列・空オブジェクトの場合は
    /// 未入力として扱い、次の候補キーを探索する。
    pub fn lookup(self, form: &Map<String, Value>) -> Option<&Value> {
        [self.key(), self.alias()]
            .into_iter()
            .filter_map(|key| form.get(key))
            .find(|value| is_filled(value))
    }

    /// フィールド値を文字列として解決（未入力ならデフォルト値）
    pub fn resolve(self, form: &Map<String, Value>) -> String {
        self.lookup(form)
            .map(value_to_text)
            .unwrap_or_else(|| self.default_value().to_string())
    }
}

/// JSON値が入力済みとみなせるかどうか
pub fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// 文字列はそのまま、それ以外はコンパクトなJSON表現に変換
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_keys_and_aliases() {
        assert_eq!(FormField::Name.key(), "nome");
        assert_eq!(FormField::Name.alias(), "name");
        assert_eq!(FormField::Email.key(), "email");
        assert_eq!(FormField::Email.alias(), "email");
        assert_eq!(FormField::Phone.key(), "telefone");
        assert_eq!(FormField::Phone.alias(), "phone");
        assert_eq!(FormField::Subject.key(), "assunto");
        assert_eq!(FormField::Subject.alias(), "subject");
        assert_eq!(FormField::Message.key(), "mensagem");
        assert_eq!(FormField::Message.alias(), "message");
    }

    #[test]
    fn test_default_values() {
        assert_eq!(FormField::Name.default_value(), "Não informado");
        assert_eq!(FormField::Email.default_value(), "Não informado");
        assert_eq!(FormField::Phone.default_value(), "Não informado");
        assert_eq!(FormField::Subject.default_value(), "Geral");
        assert_eq!(FormField::Message.default_value(), "");
    }

    #[test]
    fn test_required_fields() {
        assert!(FormField::Name.is_required());
        assert!(FormField::Email.is_required());
        assert!(FormField::Message.is_required());
        assert!(!FormField::Phone.is_required());
        assert!(!FormField::Subject.is_required());
    }

    /// ポルトガル語キーがエイリアスより優先される
    #[test]
    fn test_resolve_prefers_localized_key() {
        let form = form(json!({"nome": "Ana", "name": "Anna"}));
        assert_eq!(FormField::Name.resolve(&form), "Ana");
    }

    #[test]
    fn test_resolve_falls_back_to_alias() {
        let form = form(json!({"phone": "+351 912 345 678"}));
        assert_eq!(FormField::Phone.resolve(&form), "+351 912 345 678");
    }

    /// 空文字列のキーはスキップしてエイリアスを参照する
    #[test]
    fn test_resolve_skips_empty_localized_value() {
        let form = form(json!({"assunto": "", "subject": "Eventos"}));
        assert_eq!(FormField::Subject.resolve(&form), "Eventos");
    }

    #[test]
    fn test_resolve_uses_default_when_missing() {
        let form = form(json!({}));
        assert_eq!(FormField::Phone.resolve(&form), "Não informado");
        assert_eq!(FormField::Subject.resolve(&form), "Geral");
        assert_eq!(FormField::Message.resolve(&form), "");
    }

    #[test]
    fn test_resolve_uses_default_for_null() {
        let form = form(json!({"telefone": null, "phone": null}));
        assert_eq!(FormField::Phone.resolve(&form), "Não informado");
    }

    /// 文字列以外の値はJSON表現で保持する
    #[test]
    fn test_resolve_non_string_value() {
        let form = form(json!({"telefone": 912345678}));
        assert_eq!(FormField::Phone.resolve(&form), "912345678");
    }

    #[test]
    fn test_is_filled() {
        assert!(!is_filled(&json!(null)));
        assert!(!is_filled(&json!(false)));
        assert!(!is_filled(&json!(0)));
        assert!(!is_filled(&json!(0.0)));
        assert!(!is_filled(&json!("")));
        assert!(!is_filled(&json!([])));
        assert!(!is_filled(&json!({})));

        assert!(is_filled(&json!(true)));
        assert!(is_filled(&json!(1)));
        assert!(is_filled(&json!(" ")));
        assert!(is_filled(&json!(["a"])));
        assert!(is_filled(&json!({"a": 1})));
    }
}
