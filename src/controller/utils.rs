//! Controller utils, presents tools for parsing http requests

use failure::Error as FailureError;
use futures::future::Future;
use futures::Stream;
use hyper;
use serde::de::DeserializeOwned;
use serde_json;

/// Reads request body and parses it into provided type
pub fn parse_body<T: DeserializeOwned + 'static>(body: hyper::Body) -> Box<Future<Item = T, Error = FailureError>> {
    Box::new(
        read_body(body)
            .map_err(FailureError::from)
            .and_then(|body| serde_json::from_str::<T>(&body).map_err(FailureError::from)),
    )
}

/// Reads request body into a string
pub fn read_body(body: hyper::Body) -> Box<Future<Item = String, Error = hyper::Error>> {
    Box::new(body.concat2().map(|chunk| String::from_utf8_lossy(&chunk).to_string()))
}
