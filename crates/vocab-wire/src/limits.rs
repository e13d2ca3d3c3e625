//! Security limits for decoding untrusted input.
//!
//! The codec recurses into nested entities; these bounds keep the work
//! done for a hostile document proportional to its size and prevent
//! stack exhaustion from deeply nested trees.

/// Maximum nesting depth of entities inside property values.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Maximum number of names accepted in a type discriminator list.
pub const MAX_TYPE_NAMES: usize = 64;
