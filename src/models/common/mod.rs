pub mod nullable;
pub mod query;
pub mod response;
