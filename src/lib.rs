pub mod configure;
pub mod error;
pub mod fetcher;
pub mod gateway;
pub mod keepalive;
pub mod logger;
pub mod masking;
pub mod models;
pub mod period;
pub mod ranking;
pub mod service;
pub mod snapshot_cache;
