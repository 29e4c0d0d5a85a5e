pub mod completion;
pub mod local;

pub use completion::{AugmentationUnavailable, CompletionClient};
pub use local::{select_response, LocalAI};
