pub mod dispatch;
pub mod explore;
pub mod schema;
pub mod shared;
pub mod summary;
pub mod watch;
