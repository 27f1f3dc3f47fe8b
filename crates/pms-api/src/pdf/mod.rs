//! PDF rendering

pub mod receipt;

pub use receipt::render_receipt;
