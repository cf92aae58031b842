//! DoS prevention constants.
//!
//! These limits keep pathological inputs from producing unbounded recursion
//! or quadratic scanning.

/// Maximum number of simultaneously open emphasis spans in one block.
///
/// A marker that would open a span beyond this depth is kept as literal text.
pub const MAX_SPAN_NESTING: usize = 32;

/// Maximum heading level (`######`).
pub const MAX_HEADING_LEVEL: u8 = 6;
