use std::sync::PoisonError;

/// Repos layer Error
#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "Not found")]
    NotFound,
    #[fail(display = "Invalid argument: {}", _0)]
    InvalidArgument(String),
    #[fail(display = "Connection error: {}", _0)]
    Connection(String),
}

impl<T> From<PoisonError<T>> for Error {
    fn from(_: PoisonError<T>) -> Self {
        Error::Connection("Coupon store lock is poisoned".to_string())
    }
}
