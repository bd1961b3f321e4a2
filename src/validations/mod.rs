mod link;

pub use link::validate_url;
