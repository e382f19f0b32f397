// src/domain/specification.rs

/// A named business rule evaluated against borrowed state.
pub trait Specification {
    fn is_satisfied(&self) -> bool;
}
