mod llm_client;
mod message;
pub mod providers;
mod sampling;

pub use llm_client::*;
pub use message::*;
pub use sampling::*;
