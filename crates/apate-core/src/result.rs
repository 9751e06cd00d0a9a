use crate::UnmaskError;

pub type Result<T> = std::result::Result<T, UnmaskError>;
