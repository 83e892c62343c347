use std::time::Instant;

/// Time source injected into TTL-bearing components so tests can advance
/// time manually instead of sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}
