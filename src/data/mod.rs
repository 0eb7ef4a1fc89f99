pub mod connectors;

pub use connectors::{
    DocxFileSource, GeneratedSource, JsonFileSource, OpenAiChatGenerator, QuestionGenerator,
    QuestionSource, QuestionValidator, TextFileSource,
};
