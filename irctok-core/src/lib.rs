pub mod cli;
pub mod conf;
pub mod error;
pub mod logging;
pub mod tokenize;
pub mod users;
pub mod vocab;

pub use error::TokenizeError;
