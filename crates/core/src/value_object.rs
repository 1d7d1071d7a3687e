//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: identity does
/// not matter, only the attribute values do. `Subcategory { slug, name }` is
/// a value object; a `Cart` (same id across quantity changes) is an entity.
///
/// To "modify" a value object, build a new one. The trait only requires what
/// value semantics need:
/// - **Clone**: values are cheap to copy around
/// - **PartialEq**: compared by attribute values
/// - **Debug**: printable in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
