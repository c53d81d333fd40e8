//! Name and option normalization
//!
//! Container and image identifiers are derived from the free-form project
//! name by stripping everything that is not ASCII alphanumeric. Derived
//! identifiers are additionally lower-cased; the raw name is preserved where
//! it is used verbatim (e.g. the Swift executable name).

/// Strip every character that is not ASCII alphanumeric.
///
/// The empty string is a valid input and produces an empty result; callers
/// treat it as an empty-prefixed identifier rather than an error.
pub fn sanitize_alpha_num(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// Lower-cased sanitized name, used for container names, image names and
/// chart path segments.
pub fn derived_identifier(name: &str) -> String {
    sanitize_alpha_num(name).to_ascii_lowercase()
}

/// Resolve the application port: a caller-supplied port is used verbatim
/// (as a string, not validated numerically), otherwise the platform default
/// applies.
pub fn resolve_port(requested: Option<&str>, default_port: &str) -> String {
    match requested {
        Some(port) => port.to_string(),
        None => default_port.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_non_alphanumeric() {
        assert_eq!(sanitize_alpha_num("My App!"), "MyApp");
        assert_eq!(sanitize_alpha_num("my-app"), "myapp");
        assert_eq!(sanitize_alpha_num("app_2.0"), "app20");
    }

    #[test]
    fn test_sanitize_keeps_casing() {
        assert_eq!(sanitize_alpha_num("CamelCase"), "CamelCase");
    }

    #[test]
    fn test_derived_identifier_lowercases() {
        assert_eq!(derived_identifier("My App!"), "myapp");
        assert_eq!(derived_identifier("my-app"), "myapp");
    }

    #[test]
    fn test_empty_name_is_valid() {
        assert_eq!(sanitize_alpha_num(""), "");
        assert_eq!(derived_identifier(""), "");
    }

    #[test]
    fn test_resolve_port_uses_caller_value_verbatim() {
        assert_eq!(resolve_port(Some("9999"), "3000"), "9999");
        // Not validated numerically
        assert_eq!(resolve_port(Some("not-a-port"), "3000"), "not-a-port");
    }

    #[test]
    fn test_resolve_port_defaults() {
        assert_eq!(resolve_port(None, "3000"), "3000");
        assert_eq!(resolve_port(None, "8080"), "8080");
    }
}
