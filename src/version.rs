// Crate identity baked in at build time; used by GET /version and outbound User-Agent.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = env!("CARGO_PKG_NAME");

/// `fijnstof/<version>`, sent with weather lookups and webhook posts.
pub fn user_agent() -> String {
    format!("{NAME}/{VERSION}")
}
