pub mod classifier;
pub mod response_parser;

pub use classifier::ResponseClassifier;
pub use response_parser::ResponseParser;
