pub mod history;
pub mod tokenizer;

pub use history::History;
pub use tokenizer::{read_line, tokenize};
