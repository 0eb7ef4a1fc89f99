use crate::error::Result;

/// Supplies the raw question pool.
pub trait QuestionSource {
    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;

    fn load(&self) -> Result<Vec<String>>;
}

/// Free-text completion backend used to invent questions on a topic.
pub trait QuestionGenerator {
    fn complete(&self, prompt: &str) -> Result<String>;
}

impl<G: QuestionGenerator + ?Sized> QuestionGenerator for &G {
    fn complete(&self, prompt: &str) -> Result<String> {
        (**self).complete(prompt)
    }
}
