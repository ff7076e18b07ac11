//! Constants and default value functions used by the Config struct.

/// Config file looked up at the repository root when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = ".diff-todos.yaml";

/// Labels searched for when neither the command line nor the config names any.
pub fn default_labels() -> Vec<String> {
    vec!["TODO".to_string(), "FIXME".to_string()]
}

/// Base revision: the upstream tracking branch of the current checkout.
pub fn default_old() -> String {
    "@{upstream}".to_string()
}

/// Target revision: the current checkout.
pub fn default_new() -> String {
    "HEAD".to_string()
}
