use env_logger::{Env, Target};

/// Install the stderr logger. `RUST_LOG` overrides the `-v` count.
pub fn init(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .target(Target::Stderr)
        .init();
}
