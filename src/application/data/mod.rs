mod input_source;
mod log_level;

pub use input_source::InputSource;
pub use log_level::LogLevel;
