//! 新着フォーム送信の通知モジュール
//!
//! 保存済みレコードの要約をSNSトピックへ発行する。
//! 通知はベストエフォートであり、失敗は呼び出し側でログ出力のみ行う。

use async_trait::async_trait;
use aws_sdk_sns::Client as SnsClient;
use aws_sdk_sns::error::DisplayErrorContext;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::SubmissionRecord;

/// 通知メールの件名
///
/// SNSの件名はASCIIのみ・100文字未満の制約があるため固定値とする。
pub const NOTIFICATION_SUBJECT: &str = "Nova mensagem do formulario de contacto";

/// 通知のエラー型
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NotifierError {
    /// AWS SDK エラー
    #[error("AWS SNS APIエラー: {0}")]
    PublishError(String),
}

/// 通知トレイト（テスト用の抽象化）
#[async_trait]
pub trait SubmissionNotifier: Send + Sync {
    /// 件名と本文を発行し、メッセージIDを返す
    async fn publish(&self, subject: &str, message: &str) -> Result<String, NotifierError>;

    /// レコードの要約をプレーンテキストで発行する
    async fn notify(&self, record: &SubmissionRecord) -> Result<String, NotifierError> {
        self.publish(NOTIFICATION_SUBJECT, &record.to_plain_text())
            .await
    }
}

/// AWS SNSを使用した通知実装
#[derive(Debug, Clone)]
pub struct SnsSubmissionNotifier {
    client: SnsClient,
    /// 発行先トピックARN
    topic_arn: String,
}

impl SnsSubmissionNotifier {
    pub fn new(client: SnsClient, topic_arn: String) -> Self {
        Self { client, topic_arn }
    }

    pub fn topic_arn(&self) -> &str {
        &self.topic_arn
    }
}

#[async_trait]
impl SubmissionNotifier for SnsSubmissionNotifier {
    async fn publish(&self, subject: &str, message: &str) -> Result<String, NotifierError> {
        info!(
            topic_arn = %self.topic_arn,
            message_length = message.len(),
            "SNSメッセージ発行開始"
        );

        let result = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await;

        match result {
            Ok(response) => {
                let message_id = response.message_id().unwrap_or("unknown").to_string();

                info!(
                    topic_arn = %self.topic_arn,
                    message_id = %message_id,
                    "SNS Publish成功"
                );

                Ok(message_id)
            }
            Err(err) => {
                let detail = DisplayErrorContext(&err).to_string();
                warn!(
                    topic_arn = %self.topic_arn,
                    error = %detail,
                    "SNS Publishエラー"
                );
                Err(NotifierError::PublishError(detail))
            }
        }
    }
}
