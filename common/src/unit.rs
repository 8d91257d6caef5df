//! Marker types.

/// Marker type describing the start of an entity's validity.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker type describing the end of an entity's validity.
#[derive(Clone, Copy, Debug)]
pub struct End;
