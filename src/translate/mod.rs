pub mod completion;
pub mod error;
pub mod interface;
pub mod prompt;
pub mod service;

pub use completion::*;
pub use error::*;
pub use interface::TranslateRequest;
pub use service::TranslatorService;
