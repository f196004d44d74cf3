use std::io::Cursor;

use log::debug;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::figment::{providers::Env, Figment};
use rocket::http::{Header, Method, Status};
use rocket::{Request, Response};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        CorsConfig {
            allowed_origin: "*".to_string(),
        }
    }
}

/// Response fairing adding cross-origin headers to every response and
/// answering preflight requests that no route handles
pub struct Cors {
    allowed_origin: String,
}

impl Cors {
    pub fn new(config: &CorsConfig) -> Cors {
        Cors {
            allowed_origin: config.allowed_origin.clone(),
        }
    }
}

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new(
            "Access-Control-Allow-Origin",
            self.allowed_origin.clone(),
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type"));

        if request.method() == Method::Options && response.status() == Status::NotFound {
            debug!("Answering preflight request for {}", request.uri());
            response.set_status(Status::NoContent);
            response.set_sized_body(0, Cursor::new(""));
        }
    }
}

pub fn figment() -> Figment {
    rocket::Config::figment()
        .merge(Env::prefixed("APP_").map(|s| s.as_str().replacen('_', ".", 1).into()))
}
