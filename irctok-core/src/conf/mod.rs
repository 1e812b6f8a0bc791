mod file;
mod options;
mod run_config;
#[cfg(test)]
mod tests;

pub use file::*;
pub use options::*;
pub use run_config::*;
