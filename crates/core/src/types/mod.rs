pub mod invocation;
pub mod language;

// Re-export commonly used types
pub use invocation::Invocation;
pub use language::Language;
