// フォーム受付Lambdaの設定
//
// 環境変数から保存先テーブル名と通知先SNSトピックを読み込む。
// 空文字（空白のみを含む）の値は未設定として扱う。

/// 環境変数名: 保存先DynamoDBテーブル
pub const ENV_TABLE_NAME: &str = "TABLE_NAME";

/// 環境変数名: 通知先SNSトピックARN
pub const ENV_SNS_TOPIC_ARN: &str = "SNS_TOPIC_ARN";

/// テーブル名のデフォルト値
pub const DEFAULT_TABLE_NAME: &str = "rotary-form-messages";

/// フォーム受付設定
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeConfig {
    /// 保存先テーブル名
    table_name: String,
    /// 通知先トピックARN（未設定なら通知しない）
    topic_arn: Option<String>,
}

impl IntakeConfig {
    /// 環境変数から設定を読み込み
    ///
    /// - TABLE_NAME: 保存先テーブル名（デフォルト: rotary-form-messages）
    /// - SNS_TOPIC_ARN: 通知先トピックARN（デフォルト: なし）
    pub fn from_env() -> Self {
        let get_optional_string = |key: &str| -> Option<String> {
            std::env::var(key)
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let table_name =
            get_optional_string(ENV_TABLE_NAME).unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());
        let topic_arn = get_optional_string(ENV_SNS_TOPIC_ARN);

        Self {
            table_name,
            topic_arn,
        }
    }

    /// 明示的な値で作成（テスト用）
    pub fn new(table_name: impl Into<String>, topic_arn: Option<String>) -> Self {
        Self {
            table_name: table_name.into(),
            topic_arn,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn topic_arn(&self) -> Option<&str> {
        self.topic_arn.as_deref()
    }

    /// 通知が有効かどうか
    pub fn notification_enabled(&self) -> bool {
        self.topic_arn.is_some()
    }
}
