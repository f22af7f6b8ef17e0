pub mod error;
pub mod output;
pub mod prompt;

pub use error::{AppError, AppResult, report_error};
pub use output::{OutputStyle, format_prediction, print_success};
pub use prompt::{prompt_input, prompt_yes_no};
