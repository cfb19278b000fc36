//! Builtin system instructions

/// Default instruction sent as the system message on every request.
pub const WRITING_ASSISTANT: &str = "You are a helpful writing assistant.";
