use crate::prelude::*;

/// Hands out JSON-RPC request ids, starting at 1.
#[derive(Debug, Default)]
pub struct IdStepper(AtomicU64);
impl IdStepper {
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}
