mod link;

pub use link::{
    delete_handler, get_link_handler, list_handler, redirect_handler, shorten_handler,
    stats_handler,
};
