//! helpers for logging.

fn init(builder: &mut env_logger::Builder) {
    static ONCE: std::sync::Once = std::sync::Once::new();

    ONCE.call_once(|| {
        builder
            .format(|buf, record| {
                use std::io::Write;

                let now = time::OffsetDateTime::now_utc();

                writeln!(
                    buf,
                    "{} {} time={} target={}",
                    record.level(),
                    record.args(),
                    now,
                    record.target()
                )
            })
            .init();
    });
}

/// Log to stderr, filtered by `RUST_LOG`.
///
/// If called multiple times in the same process, only applies once.
pub fn log_to_stderr() {
    init(&mut env_logger::builder());
}

/// Like [log_to_stderr], with a filter for when `RUST_LOG` isn't set.
pub fn log_to_stderr_with_default(filter: &str) {
    init(&mut env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(filter),
    ));
}
