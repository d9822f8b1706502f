//! Utility functions

use chrono::{DateTime, Local};

/// Generate a random UUID v4 project identifier
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Normalize a project name into a URL host label.
///
/// Lowercases and collapses runs of non-alphanumeric characters into a
/// single `-`, trimming any leading or trailing dashes.
pub fn hostname_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Clock label for a log line, e.g. "14:20:01"
pub fn clock_label(time: DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_unique() {
        assert_ne!(generate_id(), generate_id());
    }

    #[test]
    fn test_hostname_slug() {
        assert_eq!(hostname_slug("demo-app"), "demo-app");
        assert_eq!(hostname_slug("My Cool App"), "my-cool-app");
        assert_eq!(hostname_slug("  store..front  "), "store-front");
        assert_eq!(hostname_slug(""), "");
    }

    #[test]
    fn test_clock_label_format() {
        let label = clock_label(Local::now());
        assert_eq!(label.len(), 8);
        assert_eq!(label.as_bytes()[2], b':');
        assert_eq!(label.as_bytes()[5], b':');
    }
}
