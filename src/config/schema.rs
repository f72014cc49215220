use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Repository reported on when `--repo` is not given, as OWNER/REPO
    pub repo: Option<String>,
    /// REST API base URL, e.g. https://ghe.example.com/api/v3
    pub api_url: Option<String>,
}
