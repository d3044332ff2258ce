//! Element identity from a stack of hashed scopes

use std::fmt;

use tracing::warn;

/// FNV-1a 64-bit offset basis, the root of every id chain
pub const FNV64_START: u64 = 14_695_981_039_346_656_037;
/// FNV-1a 64-bit prime
pub const FNV64_PRIME: u64 = 1_099_511_628_211;

/// Identity of a UI element. Recomputed every frame from the id stack,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct IdHash(pub u64);

impl IdHash {
    /// "No element"
    pub const NONE: Self = Self(0);
    /// The sentinel at the bottom of the id stack
    pub const ROOT: Self = Self(FNV64_START);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        self != Self::NONE
    }
}

impl fmt::Display for IdHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Fold bytes into an FNV-1a hash
pub fn hash_bytes(bytes: &[u8], start: u64) -> u64 {
    bytes
        .iter()
        .fold(start, |hash, &b| (hash ^ b as u64).wrapping_mul(FNV64_PRIME))
}

/// Fold a label's UTF-8 bytes into a hash
pub fn hash_str(label: &str, start: u64) -> u64 {
    hash_bytes(label.as_bytes(), start)
}

/// Fold an integer id (little-endian bytes) into a hash
pub fn hash_int(id: i32, start: u64) -> u64 {
    hash_bytes(&id.to_le_bytes(), start)
}

/// Stack of id scopes. The bottom entry is [`IdHash::ROOT`] and can't be
/// popped.
#[derive(Debug, Clone)]
pub struct IdStack {
    stack: Vec<IdHash>,
}

impl Default for IdStack {
    fn default() -> Self {
        Self::new()
    }
}

impl IdStack {
    pub fn new() -> Self {
        Self {
            stack: vec![IdHash::ROOT],
        }
    }

    pub fn top(&self) -> IdHash {
        self.stack.last().copied().unwrap_or(IdHash::ROOT)
    }

    /// Number of scopes above the root
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    /// Hash `label` under the current scope without pushing
    pub fn stack_hash(&self, label: &str) -> IdHash {
        IdHash(hash_str(label, self.top().0))
    }

    pub fn stack_hash_int(&self, id: i32) -> IdHash {
        IdHash(hash_int(id, self.top().0))
    }

    pub fn push_id(&mut self, label: &str) -> IdHash {
        let id = self.stack_hash(label);
        self.stack.push(id);
        id
    }

    pub fn push_id_int(&mut self, id: i32) -> IdHash {
        let id = self.stack_hash_int(id);
        self.stack.push(id);
        id
    }

    pub fn pop_id(&mut self) {
        if self.stack.len() <= 1 {
            warn!("Tried to pop too many 'id's! Do you have a push/pop mismatch?");
            return;
        }
        self.stack.pop();
    }

    /// Drop back to the root, returning how many scopes were left open
    pub fn reset(&mut self) -> usize {
        let open = self.depth();
        self.stack.truncate(1);
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv_reference_values() {
        // Published FNV-1a 64 test vectors
        assert_eq!(hash_str("", FNV64_START), 0xcbf29ce484222325);
        assert_eq!(hash_str("a", FNV64_START), 0xaf63dc4c8601ec8c);
        assert_eq!(hash_str("foobar", FNV64_START), 0x85944171f73967e8);
    }

    #[test]
    fn test_push_chain_matches_direct_fold() {
        let mut ids = IdStack::new();
        ids.push_id("window");
        ids.push_id("row");
        let id = ids.stack_hash("ok");

        let direct = hash_str("ok", hash_str("row", hash_str("window", FNV64_START)));
        assert_eq!(id, IdHash(direct));
    }

    #[test]
    fn test_scopes_differ() {
        let mut ids = IdStack::new();
        ids.push_id("a");
        let in_a = ids.stack_hash("ok");
        ids.pop_id();
        ids.push_id("b");
        let in_b = ids.stack_hash("ok");
        assert_ne!(in_a, in_b);
    }

    #[test]
    fn test_int_ids() {
        let mut ids = IdStack::new();
        let pushed = ids.push_id_int(7);
        assert_eq!(pushed, IdHash(hash_bytes(&7i32.to_le_bytes(), FNV64_START)));
        assert_ne!(ids.stack_hash_int(1), ids.stack_hash_int(2));
    }

    #[test]
    fn test_pop_past_root() {
        let mut ids = IdStack::new();
        ids.push_id("x");
        ids.pop_id();
        ids.pop_id();
        ids.pop_id();
        assert_eq!(ids.depth(), 0);
        assert_eq!(ids.top(), IdHash::ROOT);
    }

    #[test]
    fn test_reset_reports_open_scopes() {
        let mut ids = IdStack::new();
        ids.push_id("a");
        ids.push_id("b");
        assert_eq!(ids.reset(), 2);
        assert_eq!(ids.depth(), 0);
    }
}
