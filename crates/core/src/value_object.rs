//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity**. Two value objects
//! with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// - **Value Object**: `Price(4_999)` equals any other `Price(4_999)`
/// - **Entity**: a `Product` is the same product as long as its id matches
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Price(u64);
///
/// impl ValueObject for Price {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
