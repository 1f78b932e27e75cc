// お問い合わせフォーム受付ハンドラー
//
// 1イベントにつき1回呼び出され、以下を順に行う:
// 1. HTTPメソッド判定（OPTIONSならプリフライト応答）
// 2. 本文の存在確認とJSONパース
// 3. 必須項目の検証
// 4. レコード生成とストアへの保存
// 5. 通知（設定時のみ、失敗は無視）
// 6. レスポンス生成

use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use super::http_response::HttpResponse;
use super::request_parser::RequestParser;
use crate::domain::{
    FormValidationError, FormValidator, MSG_EMPTY_BODY, MSG_INTERNAL_ERROR, SubmissionRecord,
};
use crate::infrastructure::{RepositoryError, SubmissionNotifier, SubmissionRepository};

/// フォーム受付処理のエラー型
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntakeError {
    /// 本文が存在しない、または空
    #[error("{msg}", msg = MSG_EMPTY_BODY)]
    EmptyBody,

    /// 必須項目の欠落
    #[error(transparent)]
    Validation(#[from] FormValidationError),

    /// 本文が文字列でない
    #[error("request body must be a string")]
    BodyNotString,

    /// 本文のJSONパースに失敗
    #[error("failed to parse request body: {0}")]
    InvalidJson(String),

    /// 本文がJSONオブジェクトでない
    #[error("request body must be a JSON object")]
    BodyNotObject,

    /// ストアへの保存に失敗
    #[error("failed to store submission: {0}")]
    Repository(#[from] RepositoryError),
}

impl IntakeError {
    /// クライアント起因のエラー（400）かどうか
    pub fn is_client_error(&self) -> bool {
        matches!(self, IntakeError::EmptyBody | IntakeError::Validation(_))
    }

    /// HTTPステータスコード
    ///
    /// 不正なJSONも内部エラー（500）として扱う。
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() { 400 } else { 500 }
    }

    /// クライアントに返すメッセージ
    ///
    /// 内部エラーの詳細は返さず、固定メッセージに置き換える。
    pub fn public_message(&self) -> String {
        if self.is_client_error() {
            self.to_string()
        } else {
            MSG_INTERNAL_ERROR.to_string()
        }
    }
}

/// お問い合わせフォーム受付ハンドラー
///
/// ストアと通知はプロセス起動時に一度だけ生成して注入する。
/// ハンドラー自体は状態を持たず、並行呼び出しが可能。
pub struct FormIntakeHandler<R, N>
where
    R: SubmissionRepository,
    N: SubmissionNotifier,
{
    /// 送信レコードの保存先
    repository: R,
    /// 通知先（未設定なら通知しない）
    notifier: Option<N>,
}

impl<R, N> FormIntakeHandler<R, N>
where
    R: SubmissionRepository,
    N: SubmissionNotifier,
{
    /// 新しいFormIntakeHandlerを作成
    pub fn new(repository: R, notifier: Option<N>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// API Gatewayイベントを処理してレスポンスを返す
    ///
    /// 全ての分岐でCORSヘッダー付きのレスポンスを返し、エラーにはならない。
    pub async fn handle(&self, event: &Value) -> HttpResponse {
        let method = RequestParser::http_method(event);

        info!(
            method = method.unwrap_or("unknown"),
            has_body = event.get("body").is_some_and(|b| !b.is_null()),
            "フォーム受付リクエスト受信"
        );

        if RequestParser::is_preflight(event) {
            return HttpResponse::preflight();
        }

        match self.process(event).await {
            Ok(record) => {
                info!(submission_id = %record.id(), "フォーム受付完了");
                HttpResponse::success()
            }
            Err(err) if err.is_client_error() => {
                info!(reason = %err, "フォーム受付を拒否");
                HttpResponse::failure(err.status_code(), err.public_message())
            }
            Err(err) => {
                error!(error = %err, "フォーム受付処理でエラー");
                HttpResponse::failure(err.status_code(), err.public_message())
            }
        }
    }

    /// 本文パースから保存・通知までを実行
    async fn process(&self, event: &Value) -> Result<SubmissionRecord, IntakeError> {
        let form = RequestParser::parse_form(event)?;

        FormValidator::validate(&form)?;

        let record = SubmissionRecord::from_form(&form);

        self.repository.put(&record).await?;
        info!(submission_id = %record.id(), "送信レコードを保存");

        self.notify(&record).await;

        Ok(record)
    }

    /// 通知を送信（失敗してもログ出力のみ、再試行しない）
    async fn notify(&self, record: &SubmissionRecord) {
        let Some(notifier) = &self.notifier else {
            return;
        };

        if let Err(err) = notifier.notify(record).await {
            warn!(
                submission_id = %record.id(),
                error = %err,
                "通知の送信に失敗"
            );
        }
    }
}
