//! Marker id generation.

/// Produce a fresh marker id: UUID v7, a monotonic timestamp plus random
/// bits. Unique within a store's lifetime; collision probability is
/// negligible but not cryptographically guaranteed.
pub fn next_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
