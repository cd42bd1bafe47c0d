pub mod completion_client;

pub use completion_client::{ChatCompletionRequest, CompletionClient};
