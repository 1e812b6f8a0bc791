mod header;
mod line;
mod log;
mod normalize;
mod pipeline;
mod rules;
#[cfg(test)]
mod tests;
mod unk;

pub use header::is_timestamp;
pub use line::*;
pub use log::*;
pub use normalize::*;
pub use rules::USER_PLACEHOLDER;
pub use unk::*;
