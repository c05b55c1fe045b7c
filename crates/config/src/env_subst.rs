/// Replace `${ENV_VAR}` placeholders in the raw config text.
///
/// Unresolvable or malformed placeholders are left as-is.
pub fn substitute_env(input: &str) -> String {
    substitute_env_with(input, |name| std::env::var(name).ok())
}

/// Placeholder replacement with a caller-supplied lookup, so tests don't have
/// to mutate the process environment.
fn substitute_env_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) if end > 0 => {
                let name = &after[..end];
                match lookup(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push_str("${");
                        out.push_str(name);
                        out.push('}');
                    },
                }
                rest = &after[end + 1..];
            },
            // "${}" or no closing brace: emit literally and move on.
            _ => {
                out.push_str("${");
                rest = after;
            },
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "OPAMP_ENDPOINT" => Some("https://opamp.example.com".to_string()),
            "OPAMP_DIR" => Some("/var/lib/opamp".to_string()),
            _ => None,
        }
    }

    #[test]
    fn substitutes_known_vars() {
        assert_eq!(
            substitute_env_with("endpoint = \"${OPAMP_ENDPOINT}\"", lookup),
            "endpoint = \"https://opamp.example.com\""
        );
    }

    #[test]
    fn substitutes_multiple_vars() {
        assert_eq!(
            substitute_env_with("${OPAMP_ENDPOINT}:${OPAMP_DIR}", lookup),
            "https://opamp.example.com:/var/lib/opamp"
        );
    }

    #[test]
    fn leaves_unknown_var() {
        assert_eq!(
            substitute_env_with("${OPAMP_NONEXISTENT_XYZ}", lookup),
            "${OPAMP_NONEXISTENT_XYZ}"
        );
    }

    #[test]
    fn leaves_malformed_placeholders() {
        assert_eq!(substitute_env_with("${", lookup), "${");
        assert_eq!(substitute_env_with("${}", lookup), "${}");
        assert_eq!(
            substitute_env_with("${OPAMP_ENDPOINT", lookup),
            "${OPAMP_ENDPOINT"
        );
    }

    #[test]
    fn no_placeholders() {
        assert_eq!(substitute_env("plain text"), "plain text");
    }
}
