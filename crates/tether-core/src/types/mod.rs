pub mod json;
pub mod scale;
