mod requests;
mod sorting;
mod types;

pub use requests::CreateQuestionRequest;
pub use sorting::sort_recent;
pub use types::Question;
