//! Public library API for inspecting `.splinecode` scene containers.

/// Stream decoding, shape heuristics, analysis passes, and report builders.
pub mod spline;
