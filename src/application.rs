// アプリケーション層モジュール
pub mod http_response;
pub mod intake_handler;
pub mod request_parser;

// 再エクスポート
pub use http_response::HttpResponse;
pub use intake_handler::{FormIntakeHandler, IntakeError};
pub use request_parser::RequestParser;
