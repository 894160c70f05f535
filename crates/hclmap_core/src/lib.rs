//! Public library API for mapping typed Rust structs to and from dynamic configuration trees.

extern crate self as hclmap;

/// Shape descriptors, encoder, decoder, and the resource metadata boundary.
pub mod sdk;
