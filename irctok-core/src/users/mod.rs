mod registry;
mod reserved;

pub use registry::*;
pub use reserved::{
    CHANNEL_KEYWORDS, COMMON_SHORT_NAMES, is_channel_keyword, is_common_short_name, is_reserved,
};
