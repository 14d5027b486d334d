use std::env;

#[derive(Clone)]
pub struct Config {
    pub storage_url: String, // "memory" or a JSON file path
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            storage_url: env::var("STORAGE_URL").unwrap_or_else(|_| "./data/availability.json".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
        }
    }
}
