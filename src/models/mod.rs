mod link;

pub use link::{LinkQueryParams, LinkRecord, LinkStats, ShortenRequest, ShortenResponse};
