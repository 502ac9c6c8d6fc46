#[derive(Clone, serde::Deserialize)]
pub struct Config {
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    "gpt-4o".to_string()
}
