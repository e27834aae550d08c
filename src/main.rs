//! # Voxel Engine Core Demo Entry Point
//!
//! Runs the library's end-to-end demo: streams chunks around the origin and
//! resolves a downward pick against the generated terrain.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(error) = voxel_engine_core::run() {
        eprintln!("fatal: {error}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
