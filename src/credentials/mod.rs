/// Environment variable name for providing a GitHub token
pub const ENV_TOKEN_VAR: &str = "GITHUB_TOKEN";

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Check for a GitHub token in the GITHUB_TOKEN environment variable.
/// Returns Some(token) if the env var is set and non-empty, None otherwise.
pub fn get_token_from_env() -> Option<String> {
    std::env::var(ENV_TOKEN_VAR)
        .ok()
        .and_then(|val| non_empty(&val))
}

/// Pick the token to authenticate with: `--token` first, then the environment.
///
/// `None` is a valid outcome; requests are then sent unauthenticated.
pub fn resolve_token(flag: Option<&str>) -> Option<String> {
    choose_token(flag, get_token_from_env())
}

fn choose_token(flag: Option<&str>, env_token: Option<String>) -> Option<String> {
    flag.and_then(non_empty).or(env_token)
}
