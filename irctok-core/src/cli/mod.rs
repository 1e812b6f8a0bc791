mod args;
mod run;
#[cfg(test)]
mod tests;

pub use args::*;
pub use run::*;
