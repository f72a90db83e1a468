pub mod casing;

pub use casing::{document_case_middleware, request_case_middleware, response_case_middleware};
