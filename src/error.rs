use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitheatError>;

#[derive(Error, Debug)]
pub enum GitheatError {
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::open::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Registry error: {0}")]
    Registry(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::open::Error> for GitheatError {
    fn from(err: gix::open::Error) -> Self {
        GitheatError::Git(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for GitheatError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        GitheatError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for GitheatError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        GitheatError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for GitheatError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        GitheatError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for GitheatError {
    fn from(err: gix::objs::decode::Error) -> Self {
        GitheatError::ObjectDecode(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for GitheatError {
    fn from(err: gix::object::commit::Error) -> Self {
        GitheatError::Commit(Box::new(err))
    }
}
