use anyhow::Result;
use rollbook::commands::Cli;
use rollbook::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Message macros route through tracing in debug mode; install the
    // subscriber only then so normal runs keep plain console output.
    if is_debug_mode() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    Cli::menu()
}
