pub mod kind;
pub mod types;

pub use kind::{AnalysisKind, UnknownKind};
pub use types::*;
