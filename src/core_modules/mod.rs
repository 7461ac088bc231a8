pub mod blob_locator;
pub mod classifier;
pub mod cooldown;
pub mod frame;
pub mod path;
pub mod tracker;
