//! `Application` is a top layer that renders controller output
//! into http responses

use futures::future;
use futures::Future;
use hyper;
use hyper::header::{ContentLength, ContentType};
use hyper::server::{Request, Response, Service};
use hyper::StatusCode;
use serde_json;

use super::error::{ControllerError, ErrorMessage};
use super::Controller;

/// Application contains controller, needed for processing requests
pub struct Application {
    pub controller: Controller,
}

impl Application {
    pub fn new(controller: Controller) -> Self {
        Self { controller }
    }
}

impl Service for Application {
    type Request = Request;
    type Response = Response;
    type Error = hyper::Error;
    type Future = Box<Future<Item = Response, Error = hyper::Error>>;

    fn call(&self, req: Request) -> Self::Future {
        debug!("Received request: {} {}", req.method(), req.path());

        Box::new(self.controller.call(req).then(|result| {
            let response = match result {
                Ok(response_body) => render_response(StatusCode::Ok, response_body),
                Err(err) => render_error(err),
            };

            future::ok(response)
        }))
    }
}

fn render_response(status: StatusCode, body: String) -> Response {
    Response::new()
        .with_status(status)
        .with_header(ContentType::json())
        .with_header(ContentLength(body.len() as u64))
        .with_body(body)
}

fn render_error(err: ControllerError) -> Response {
    if let ControllerError::InternalServerError(ref cause) = err {
        error!("Internal server error: {}", cause);
    }

    let code = err.code();
    let message = ErrorMessage {
        code: code.as_u16(),
        message: err.message(),
    };

    let body = serde_json::to_string(&message).unwrap_or_else(|_| message.message.clone());
    render_response(code, body)
}
