use serde::Deserialize;

use rocket_util::CorsConfig;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub cors: CorsConfig,
}
