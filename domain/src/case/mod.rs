//! Case subdomain: naming, entities and schema/prompt pairing.

pub mod base_name;
pub mod entities;
pub mod pairing;
