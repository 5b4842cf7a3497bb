//! Shared response types.

mod response;

pub use response::{
    CountResponse, PassportResponse, ProductTypeResponse, ProductTypesResponse, StringResponse,
    ValidationResponse, WebResponse,
};
