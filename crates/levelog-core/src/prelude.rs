//! Common module for library exports

pub use crate::error::{LevelError, LevelResult};
pub use crate::flags::Flags;
pub use crate::logger::FilteringLogger;
pub use crate::severity::Severity;
pub use crate::sink::{Sink, TextSink};
pub use crate::{debugf, errorf, infof, mandatoryf, printf, tracef, warnf};
