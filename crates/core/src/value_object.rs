//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// holding the same attributes are interchangeable. To "modify" one, build a
/// new instance.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: useful in logs and assertions
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
