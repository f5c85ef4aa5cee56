//! Core logger types

pub mod color;
pub mod duration;
pub mod emitter;
pub mod error;
pub mod inspect;
pub mod log_level;
pub mod logger;
pub mod output_format;
pub mod record;
pub mod render;
pub mod sink;
pub mod stack;
pub mod timer;
pub mod value;

pub use color::{ColorCaps, EnvSource, MapEnv, ProcessEnv};
pub use duration::{format_duration, DurationStyle};
pub use emitter::{Emitter, Target};
pub use error::{LoggerError, Result};
pub use inspect::{cause_chain, display_message, serialize_error, ErrorRecord};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, TerminateCallback};
pub use output_format::OutputFormat;
pub use record::{build_record, encode_value, stringify, DurationContext};
pub use render::{render, CIRCULAR_MARKER};
pub use sink::{discard, Discard, MemorySink};
pub use timer::Timer;
pub use value::{ErrorValue, LogValue, SharedError, SharedMap, SharedSeq};
