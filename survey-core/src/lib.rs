//! Survey answer form: field model, validation, comment composition and the
//! submit flow shared by the web client and its tests.

pub mod config;
pub mod error;
pub mod form;
pub mod notify;
pub mod payload;
pub mod route;
pub mod submit;
pub mod validation;

pub use config::Config;
pub use error::{ConfigError, SubmitError};
pub use form::{AnswerForm, Field};
pub use notify::{Toast, ToastStatus};
pub use payload::CommentPayload;
pub use route::SurveyRoute;
pub use submit::{
    begin_submit, finish_submit, prepare, settle, submit, CommentSubmitter, SubmitControl,
    SubmitGuard, SubmitRefused,
};
pub use validation::{validate, FieldError, Validation};
