/// Implementation blocks for [`crate::common::structs::custom_error::CustomError`].
pub mod custom_error;
