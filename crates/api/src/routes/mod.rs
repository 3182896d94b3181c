//! Route definitions.
//!
//! Route tree (mounted at the application root):
//!
//! ```text
//! GET    /            -> info::root
//! GET    /about       -> info::about
//! GET    /health      -> health::health_check
//! GET    /items       -> handlers::item::list
//! POST   /items       -> handlers::item::create
//! GET    /items/{id}  -> handlers::item::get_by_id
//! PUT    /items/{id}  -> handlers::item::update
//! DELETE /items/{id}  -> handlers::item::delete
//! ```

pub mod health;
pub mod info;
pub mod item;
