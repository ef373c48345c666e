//! Embedded viewer page for Envlens.
//!
//! The `assets/` directory (HTML, CSS, JS) is compiled into the binary and
//! served through a fallback handler, so the viewer needs no files on disk.
//! All UI state - filter text, filter mode, selected category, secret
//! visibility, the transient highlight - lives in the page; the server is
//! stateless beyond the snapshot itself.

mod handler;

pub use handler::serve_asset;
