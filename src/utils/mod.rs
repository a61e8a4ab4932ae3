pub mod build_info;
pub mod paths;

use std::sync::Once;

use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Every workspace crate logs under its own target.
const DEFAULT_DIRECTIVES: [&str; 3] = [
    "tally_core=info",
    "tally_engine=info",
    "tally_config=info",
];

/// Installs the global fmt subscriber. `RUST_LOG` adds to the default
/// directives; a second call is a no-op.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = with_default_directives(EnvFilter::from_default_env());
        // Another subscriber may already be installed by the host.
        let _ = fmt().with_env_filter(filter).try_init();
    });
}

pub(crate) fn with_default_directives(mut filter: EnvFilter) -> EnvFilter {
    for raw in DEFAULT_DIRECTIVES {
        if let Ok(directive) = raw.parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use chrono::NaiveDate;
    use tally_domain::RawTransaction;
    use tally_engine::{AggregationEngine, AggregationOptions};

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn default_filter_shows_engine_warnings() {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = fmt()
            .with_env_filter(with_default_directives(EnvFilter::new("error")))
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let records = vec![RawTransaction::new("2025-01-10", "Expense", "Food", "abc")];
        tracing::subscriber::with_default(subscriber, || {
            let now = NaiveDate::from_ymd_opt(2025, 1, 31).expect("valid date");
            AggregationEngine::aggregate(&records, now, &AggregationOptions::default());
        });

        let output = String::from_utf8(buf.0.lock().expect("log buffer").clone()).expect("utf8");
        assert!(output.contains("skipped invalid transaction records"), "{output}");
        assert!(output.contains("WARN"), "{output}");
        assert!(!output.contains("aggregated transaction snapshot"), "{output}");
    }
}
