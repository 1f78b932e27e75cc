/// お問い合わせフォーム受付Lambdaエントリポイント
///
/// API Gateway（REST API / HTTP API）経由のフォーム送信を受け付け、
/// DynamoDBに保存し、設定されていればSNSで通知する。
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_sns::Client as SnsClient;
use contact_form::application::{FormIntakeHandler, HttpResponse};
use contact_form::infrastructure::{
    DynamoSubmissionRepository, IntakeConfig, SnsSubmissionNotifier, init_logging,
};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tokio::sync::OnceCell;
use tracing::{Instrument, info, info_span};

type ContactFormHandler = FormIntakeHandler<DynamoSubmissionRepository, SnsSubmissionNotifier>;

/// ハンドラーの静的インスタンス
///
/// Lambda warm start時にAWS SDKクライアントを再利用するため、
/// 一度初期化したハンドラーを静的に保持する。
static HANDLER: OnceCell<ContactFormHandler> = OnceCell::const_new();

/// ハンドラーを取得（初期化されていなければ初期化）
async fn get_handler() -> &'static ContactFormHandler {
    HANDLER
        .get_or_init(|| async {
            let config = IntakeConfig::from_env();
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

            let repository = DynamoSubmissionRepository::new(
                DynamoDbClient::new(&aws_config),
                config.table_name().to_string(),
            );
            let notifier = config
                .topic_arn()
                .map(|arn| SnsSubmissionNotifier::new(SnsClient::new(&aws_config), arn.to_string()));

            info!(
                table_name = repository.table_name(),
                notification_enabled = config.notification_enabled(),
                "フォーム受付ハンドラーを初期化"
            );

            FormIntakeHandler::new(repository, notifier)
        })
        .await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// 全ての結果をAPI Gatewayプロキシ統合レスポンスとして返すため、
/// Lambda呼び出し自体はエラーにならない。
async fn handler(event: LambdaEvent<Value>) -> Result<HttpResponse, Error> {
    let span = info_span!("request", request_id = %event.context.request_id);

    let response = async {
        let intake_handler = get_handler().await;
        intake_handler.handle(&event.payload).await
    }
    .instrument(span)
    .await;

    Ok(response)
}
