pub mod fields;
pub mod toast;

pub use fields::{InputField, TextAreaField};
pub use toast::{use_toaster, ToastHost, Toaster};
