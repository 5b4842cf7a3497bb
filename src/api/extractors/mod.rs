//! Request extractors rendering their rejections as `AppError`.

mod json_body;
mod path_id;

pub use json_body::JsonBody;
pub use path_id::PathId;
