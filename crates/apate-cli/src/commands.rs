pub mod inspect;
pub mod reveal;
