pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("central topic must not be empty")]
    EmptyCentralTopic,

    #[error("subtopic at position {index} has an empty label")]
    EmptySubtopicLabel { index: usize },

    #[error("detail at position {index} under subtopic {subtopic:?} has an empty label")]
    EmptyDetailLabel { subtopic: String, index: usize },
}
