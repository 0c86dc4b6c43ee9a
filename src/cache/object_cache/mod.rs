pub mod moka;
pub mod null;
pub mod redis;
