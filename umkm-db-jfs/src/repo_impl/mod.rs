use super::*;
use umkm_core::{
    entities::*,
    repositories::*,
    store::{self, PointRecord, CART_PATH, POINTS_PATH},
};

mod cart;
mod point;

// Ids are used as path segments and must not address other records.
fn check_key(key: &str) -> Result<()> {
    if key.trim().is_empty() || key.contains('/') {
        return Err(Error::InvalidPath(key.to_owned()));
    }
    Ok(())
}
