//! Business logic of the UMKM craft finder.
//!
//! Everything here is independent of a concrete remote store
//! or device: those are reached through the traits in
//! [`repositories`], [`store`] and [`gateways`].

pub mod gateways;
pub mod hidden_gem;
pub mod proximity;
pub mod repositories;
pub mod store;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use umkm_entities::{
        cart::*, category::*, geo::*, id::*, image::*, location::*, mood::*, point::*, time::*,
    };
}
