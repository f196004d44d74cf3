#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate rocket;

use std::error::Error;

use rocket_util::Cors;

mod api;
mod config;
mod error;

#[rocket::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let figment = rocket_util::figment();
    let config: config::Config = figment.extract()?;

    rocket::custom(figment)
        .attach(Cors::new(&config.cors))
        .mount("/", api::routes())
        .register("/", api::catchers())
        .launch()
        .await?;

    Ok(())
}
