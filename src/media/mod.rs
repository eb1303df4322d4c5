pub mod library;
pub mod scanner;
