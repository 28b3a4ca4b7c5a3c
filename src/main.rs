mod config;
mod database;
mod error;
mod handlers;
mod model;
mod seed;
mod views;

use std::process;

use config::Config;
use database::Database;
use handlers::*;

use iron::prelude::Chain;
use iron::Iron;
use log::{error, info, warn};
use logger::Logger;
use router::Router;

/// Routes plus the middleware every response passes through.
fn app(database: Database) -> Chain {
    let handlers = Handlers::new(database);

    let mut router = Router::new();
    router.get("/", handlers.index, "index");
    router.get("/posts", handlers.posts, "posts");
    router.get("/posts/:index", handlers.post, "post");
    router.get("/about", handlers.about, "about");

    let mut chain = Chain::new(router);
    chain.link_after(NotFoundPage);
    chain.link_after(HtmlAfterMiddleware);
    chain
}

// RUST_LOG=logger=info,hermes_blog=info hermes_blog > logs 2>&1 &
fn main() {
    env_logger::init();
    let config = Config::from_env();

    let database = match Database::seeded() {
        Ok(database) => database,
        Err(e) => {
            error!("could not load posts: {}", e);
            process::exit(1);
        }
    };
    if database.is_empty() {
        warn!("no posts to serve");
    } else {
        info!("loaded {} posts", database.len());
    }

    let (logger_before, logger_after) = Logger::new(None);
    let mut chain = Chain::new(app(database));
    chain.link_before(logger_before); // Should be first!
    chain.link_after(logger_after); // Should be last!

    match Iron::new(chain).http(config.addr.as_str()) {
        // Dropping the listener joins the server threads.
        Ok(_listening) => info!("listening on {}", config.addr),
        Err(e) => {
            error!("could not listen on {}: {}", config.addr, e);
            process::exit(1);
        }
    }
}
