use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for the table's scope and lookup events.
///
/// Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=essl_symtab=trace` to see every push, pop and declaration.
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A host that already installed a global subscriber keeps it.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
