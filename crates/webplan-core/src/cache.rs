use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheKind {
    Memory,
    Filesystem,
}

/// Persistent cache declaration. The engine owns keys and invalidation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheConfig {
    #[serde(rename = "type")]
    pub kind: CacheKind,
    /// Let the engine keep extra bookkeeping in memory between builds.
    pub allow_collecting_memory: bool,
}

impl CacheConfig {
    #[must_use]
    pub fn filesystem() -> Self {
        Self {
            kind: CacheKind::Filesystem,
            allow_collecting_memory: true,
        }
    }
}
