use std::env;

const API_URL_PROD: &str = "https://api.collab.land";
const API_URL_QA: &str = "https://api-qa.collab.land";

#[derive(Clone)]
pub struct Config {
    pub skip_verification: bool,
    pub collabland_env: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            skip_verification: env::var("SKIP_VERIFICATION").is_ok(),
            collabland_env: env::var("COLLABLAND_ENV").unwrap_or_else(|_| "prod".into()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".into())
                .parse()
                .unwrap_or(3000),
        }
    }

    /// Base URL of the Collab.Land API the trust material is fetched from.
    pub fn api_base_url(&self) -> &'static str {
        if self.collabland_env == "qa" {
            API_URL_QA
        } else {
            API_URL_PROD
        }
    }
}
