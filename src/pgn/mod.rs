pub mod san;
pub mod tokenizer;

pub use san::{MoveClass, MoveToken};
pub use tokenizer::{tokenize, Tokenizer};
