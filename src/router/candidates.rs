/// Container-internal service name, reachable when the relay runs next to
/// the backend on the same network.
pub const INTERNAL_BASE: &str = "http://api:8000";
/// Host-dev fallback.
pub const LOOPBACK_BASE: &str = "http://localhost:8000";

/// Ordered backend bases the relay tries: configured override first, then
/// the fixed fallbacks. Deterministic, no network access, never fails.
pub fn resolve_candidates(backend_override: Option<&str>) -> Vec<String> {
    let mut candidates = Vec::new();
    if let Some(base) = backend_override {
        let trimmed = base.trim_end_matches('/');
        if !trimmed.is_empty() {
            candidates.push(trimmed.to_string());
        }
    }
    candidates.push(INTERNAL_BASE.to_string());
    candidates.push(LOOPBACK_BASE.to_string());
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_comes_first() {
        let candidates = resolve_candidates(Some("http://backend.internal:9000"));
        assert_eq!(
            candidates,
            vec![
                "http://backend.internal:9000".to_string(),
                INTERNAL_BASE.to_string(),
                LOOPBACK_BASE.to_string(),
            ]
        );
    }

    #[test]
    fn missing_override_is_omitted() {
        let candidates = resolve_candidates(None);
        assert_eq!(candidates, vec![INTERNAL_BASE.to_string(), LOOPBACK_BASE.to_string()]);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let candidates = resolve_candidates(Some("http://backend.internal:9000/"));
        assert_eq!(candidates[0], "http://backend.internal:9000");
    }

    #[test]
    fn empty_override_is_omitted() {
        let candidates = resolve_candidates(Some(""));
        assert_eq!(candidates.len(), 2);
    }
}
