// Kasiski examination stages, leaf-first.
pub mod patterns;
pub mod distances;
pub mod key_length;
pub mod frequency;
