//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable domain objects with no identity of their own:
/// two instances carrying the same attribute values are the same value. To
/// "modify" one, construct a new instance and let the old one go.
///
/// The supertraits encode the contract: value objects are cheap to copy
/// (`Clone`), compared attribute-by-attribute (`PartialEq`), and printable
/// for diagnostics (`Debug`).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
