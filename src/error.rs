use thiserror::Error;

/// Errors raised by vehicle configuration calls.
///
/// Construction never fails past argument validation: `reset` and `extract`
/// are total, so this enum stays small.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssemblyError {
    #[error("invalid argument for '{field}': {value}")]
    InvalidArgument { field: &'static str, value: i64 },
}
