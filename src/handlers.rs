use std::sync::Arc;
use iron::{Handler, status, IronResult, IronError, Response, Request, AfterMiddleware};
use iron::headers::ContentType;
use log::info;
use maud::Markup;
use router::Router;

use crate::database::Database;
use crate::error::BlogError;
use crate::views;

/// Get the value of a parameter bound by the matched route.
/// Every route that uses this binds the parameter, so a miss reads as empty.
macro_rules! get_http_param {
    ( $r:expr, $e:expr ) => {
        $r.extensions.get::<Router>().and_then(|params| params.find($e)).unwrap_or("")
    }
}

/// A post index is a run of ASCII digits. Signs, blanks and anything else name no post.
fn parse_index(segment: &str) -> Result<usize, BlogError> {
    let not_found = || BlogError::NotFound(segment.to_string());
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_found());
    }
    segment.parse::<usize>().map_err(|_| not_found())
}

fn page(markup: Markup) -> Response {
    Response::with((status::Ok, markup.into_string()))
}

pub struct Handlers {
    pub index: IndexHandler,
    pub posts: PostsHandler,
    pub post: PostHandler,
    pub about: AboutHandler,
}

impl Handlers {
    /// The store is never written after startup, so handlers share it without a lock.
    pub fn new(database: Database) -> Handlers {
        let database = Arc::new(database);
        Handlers {
            index: IndexHandler,
            posts: PostsHandler::new(database.clone()),
            post: PostHandler::new(database.clone()),
            about: AboutHandler,
        }
    }
}

pub struct IndexHandler;

impl Handler for IndexHandler {
    fn handle(&self, _: &mut Request) -> IronResult<Response> {
        Ok(page(views::index()))
    }
}

pub struct PostsHandler {
    database: Arc<Database>,
}

impl PostsHandler {
    fn new(database: Arc<Database>) -> PostsHandler {
        PostsHandler { database: database }
    }
}

impl Handler for PostsHandler {
    fn handle(&self, _: &mut Request) -> IronResult<Response> {
        Ok(page(views::posts(self.database.posts())))
    }
}

pub struct PostHandler {
    database: Arc<Database>,
}

impl PostHandler {
    fn new(database: Arc<Database>) -> PostHandler {
        PostHandler { database: database }
    }
}

impl Handler for PostHandler {
    fn handle(&self, req: &mut Request) -> IronResult<Response> {
        let index = parse_index(get_http_param!(req, "index"))?;
        let post = self.database.post(index)?;

        Ok(page(views::post(post)))
    }
}

pub struct AboutHandler;

impl Handler for AboutHandler {
    fn handle(&self, _: &mut Request) -> IronResult<Response> {
        Ok(page(views::about()))
    }
}

/// Turns every `404` error, from a handler or from the router, into the not-found page.
pub struct NotFoundPage;

impl AfterMiddleware for NotFoundPage {
    fn catch(&self, req: &mut Request, err: IronError) -> IronResult<Response> {
        if err.response.status != Some(status::NotFound) {
            return Err(err);
        }
        info!("{} {}: {}", req.method, req.url, err);
        Ok(Response::with((status::NotFound, views::not_found().into_string())))
    }
}

pub struct HtmlAfterMiddleware;

impl AfterMiddleware for HtmlAfterMiddleware {
    fn after(&self, _: &mut Request, mut res: Response) -> IronResult<Response> {
        res.headers.set(ContentType::html());
        Ok(res)
    }
}
