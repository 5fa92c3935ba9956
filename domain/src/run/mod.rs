//! Run subdomain: the request payload and the remote verdict.

pub mod payload;
pub mod result;
