//! Concrete operator handed to the CLI by `main`.

/// Implements every operator use-case against the real infrastructure.
#[derive(Debug, Clone, Copy, Default)]
pub struct Operator;
