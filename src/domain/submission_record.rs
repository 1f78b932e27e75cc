// フォーム送信レコード
//
// 1リクエストにつき1件生成され、ストアへ一度だけ書き込まれる不変データ。

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::form_field::FormField;

/// 送信日時のフォーマット（UTC、マイクロ秒精度、`Z`サフィックス付き）
pub const SUBMITTED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// 主キー属性名
pub const ATTR_ID: &str = "id";

/// 送信日時属性名
pub const ATTR_SUBMITTED_AT: &str = "data_envio";

/// フォーム送信レコード
///
/// 構築後は変更できない。全フィールドはデフォルト値により常に値を持つ。
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRecord {
    id: Uuid,
    name: String,
    email: String,
    phone: String,
    subject: String,
    message: String,
    submitted_at: String,
}

impl SubmissionRecord {
    /// フォーム値から新しいレコードを生成（UUID v4と現在時刻を付与）
    pub fn from_form(form: &Map<String, Value>) -> Self {
        Self::with_identity(form, Uuid::new_v4(), Utc::now())
    }

    /// IDと送信日時を指定してレコードを生成
    pub fn with_identity(form: &Map<String, Value>, id: Uuid, submitted_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: FormField::Name.resolve(form),
            email: FormField::Email.resolve(form),
            phone: FormField::Phone.resolve(form),
            subject: FormField::Subject.resolve(form),
            message: FormField::Message.resolve(form),
            submitted_at: submitted_at.format(SUBMITTED_AT_FORMAT).to_string(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn submitted_at(&self) -> &str {
        &self.submitted_at
    }

    /// フォームフィールドの値
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    /// ストアに保存する属性名と値のペア
    ///
    /// 属性名はポルトガル語キー（id, nome, email, telefone, assunto, mensagem, data_envio）。
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attributes = Vec::with_capacity(FormField::ALL.len() + 2);
        attributes.push((ATTR_ID, self.id.to_string()));
        for field in FormField::ALL {
            attributes.push((field.key(), self.field(field).to_string()));
        }
        attributes.push((ATTR_SUBMITTED_AT, self.submitted_at.clone()));
        attributes
    }

    /// 通知用のプレーンテキスト要約
    pub fn to_plain_text(&self) -> String {
        format!(
            "Nova mensagem recebida pelo formulário de contacto.\n\n\
             ID: {}\n\
             Nome: {}\n\
             Email: {}\n\
             Telefone: {}\n\
             Assunto: {}\n\
             Data de envio: {}\n\n\
             Mensagem:\n{}\n",
            self.id, self.name, self.email, self.phone, self.subject, self.submitted_at, self.message
        )
    }
}
