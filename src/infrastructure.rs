// インフラストラクチャ層モジュール
pub mod intake_config;
pub mod logging;
pub mod submission_notifier;
pub mod submission_repository;

// 再エクスポート
pub use intake_config::IntakeConfig;
pub use logging::init_logging;
pub use submission_notifier::{NotifierError, SnsSubmissionNotifier, SubmissionNotifier};
pub use submission_repository::{
    DynamoSubmissionRepository, RepositoryError, SubmissionRepository,
};
