//! Codec implementations for the supported value shapes.

pub mod adapter;
pub mod associative;
pub mod primitives;
pub mod sequence;
pub mod text;
pub mod tuple;
