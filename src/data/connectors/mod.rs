mod docx;
mod generative;
mod json;
mod llm;
mod text;
mod types;
mod validator;

pub use docx::DocxFileSource;
pub use generative::GeneratedSource;
pub use json::JsonFileSource;
pub use llm::OpenAiChatGenerator;
pub use text::TextFileSource;
pub use types::{QuestionGenerator, QuestionSource};
pub use validator::QuestionValidator;
