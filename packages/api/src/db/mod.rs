//! PostgreSQL connection pool shared by every server function. Entirely gated
//! behind `#[cfg(feature = "server")]` so client (WASM) builds never pull in
//! SQLx or Tokio networking code; the lazy singleton itself lives in `pool.rs`.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;
