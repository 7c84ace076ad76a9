//! # strut-cli
//!
//! Command-line driver for inspecting what `strut-core` derives from a
//! service description.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `strut routes <file>` | Table of every HTTP route and the method it invokes |
//! | `strut model <file>` | The full binding model as pretty JSON |
//! | `strut helper` | The matcher source bundle pasted into generated servers |
//!
//! Service descriptions are YAML, or JSON when the file ends in `.json`.
//! Generator settings come from `strut.yaml` / `strut-{profile}.yaml` in the
//! working directory (see [`strut_core::StrutConfig`]).

pub mod commands;

/// Install the global `tracing` subscriber, filtered by `RUST_LOG`
/// (default `info`). Logs go to stderr so command output stays pipeable.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
