pub mod encoder;

pub use encoder::{encode, placement};
