// DynamoDBにフォーム送信レコードを保存するリポジトリ
use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use thiserror::Error;

use crate::domain::SubmissionRecord;

/// リポジトリ操作のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    /// DynamoDBへの書き込みに失敗
    #[error("Write error: {0}")]
    WriteError(String),
}

/// フォーム送信レコード永続化用トレイト
///
/// 実際のDynamoDBとテスト用モックを差し替え可能にする。
/// 読み取り操作は持たない。
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// レコードを主キー`id`でupsertする
    ///
    /// # 戻り値
    /// * 成功時は`Ok(())`
    /// * 失敗時は`Err(RepositoryError)`
    async fn put(&self, record: &SubmissionRecord) -> Result<(), RepositoryError>;
}

/// SubmissionRepositoryのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoSubmissionRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// 保存先テーブル名
    table_name: String,
}

impl DynamoSubmissionRepository {
    /// 新しいDynamoSubmissionRepositoryを作成
    ///
    /// # 引数
    /// * `client` - DynamoDBクライアント
    /// * `table_name` - 保存先テーブルの名前
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// レコードをDynamoDBアイテムの属性に変換
    ///
    /// 全属性を文字列型（S）として保存する。
    fn to_item(record: &SubmissionRecord) -> Vec<(&'static str, AttributeValue)> {
        record
            .attributes()
            .into_iter()
            .map(|(name, value)| (name, AttributeValue::S(value)))
            .collect()
    }
}

#[async_trait]
impl SubmissionRepository for DynamoSubmissionRepository {
    async fn put(&self, record: &SubmissionRecord) -> Result<(), RepositoryError> {
        let mut request = self.client.put_item().table_name(&self.table_name);

        for (name, value) in Self::to_item(record) {
            request = request.item(name, value);
        }

        request
            .send()
            .await
            .map_err(|e| RepositoryError::WriteError(DisplayErrorContext(&e).to_string()))?;

        Ok(())
    }
}
