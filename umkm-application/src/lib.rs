#[macro_use]
extern crate log;

mod cart;
mod create_point;
mod delete_point;
mod hidden_gem_watcher;
mod set_mood;
mod update_point;

pub mod prelude {
    pub use super::{
        cart::*, create_point::*, delete_point::*, hidden_gem_watcher::*, set_mood::*,
        update_point::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use umkm_core::{entities::*, repositories::*, usecases};
pub(crate) use umkm_db_jfs::JsonStore;

#[cfg(test)]
pub(crate) mod tests;
