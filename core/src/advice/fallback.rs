//! Static fallback recommendations

use crate::models::advice::{AdviceItem, Impact};

/// The fixed recommendations served when no API key is configured or the
/// advice service cannot be reached. Same three items on every call.
pub fn fallback_advice() -> Vec<AdviceItem> {
    vec![
        AdviceItem {
            title: "Enable HTTP/3".to_string(),
            content: "Switch to HTTP/3 to reduce latency for mobile users.".to_string(),
            impact: Impact::High,
        },
        AdviceItem {
            title: "Static Optimization".to_string(),
            content: "Use server-side rendering for critical landing pages.".to_string(),
            impact: Impact::Medium,
        },
        AdviceItem {
            title: "Gzip Compression".to_string(),
            content: "Ensure all assets are gzipped to save bandwidth costs.".to_string(),
            impact: Impact::High,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_stable() {
        let first = fallback_advice();
        let second = fallback_advice();

        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
        assert_eq!(first[0].title, "Enable HTTP/3");
    }
}
