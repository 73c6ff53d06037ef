use serde::Serialize;
use std::fmt;

/// API namespace a request came through.
///
/// Every surface shares the same store and engine; the surface only picks
/// the identifier format and the `version` field of the health payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiSurface {
    /// Bare `/tasks` and `/health` paths
    Unversioned,
    /// `/api/v1/...`
    V1,
    /// `/api/v2/...`, short identifiers
    V2,
}

impl ApiSurface {
    /// Version label reported by the health endpoint, `None` for the bare paths
    pub fn version_label(&self) -> Option<&'static str> {
        match self {
            ApiSurface::Unversioned => None,
            ApiSurface::V1 => Some("v1"),
            ApiSurface::V2 => Some("v2"),
        }
    }

    /// Path prefix this surface is mounted under
    pub fn path_prefix(&self) -> &'static str {
        match self {
            ApiSurface::Unversioned => "",
            ApiSurface::V1 => "/api/v1",
            ApiSurface::V2 => "/api/v2",
        }
    }

    /// Whether identifiers minted through this surface use the short format
    pub fn uses_short_ids(&self) -> bool {
        matches!(self, ApiSurface::V2)
    }
}

impl fmt::Display for ApiSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.version_label().unwrap_or("unversioned"))
    }
}
