// ドメイン層モジュール
pub mod form_field;
pub mod form_validator;
pub mod intake_response;
pub mod submission_record;

// 再エクスポート
pub use form_field::{DEFAULT_NOT_INFORMED, DEFAULT_SUBJECT, FormField};
pub use form_validator::{FormValidationError, FormValidator};
pub use intake_response::{MSG_EMPTY_BODY, MSG_INTERNAL_ERROR, MSG_SUCCESS, ResponseBody};
pub use submission_record::SubmissionRecord;
