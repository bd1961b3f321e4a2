mod link;
mod memory;
mod postgres;

pub use link::LinkStore;
pub use memory::MemoryLinkStore;
pub use postgres::PgLinkStore;

#[cfg(test)]
pub use link::MockLinkStore;
