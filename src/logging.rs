use log::LevelFilter;

pub struct Logger;

impl Logger {
    /// installs the colored terminal logger, `RUST_LOG` still refines per-module levels
    pub fn init(level: LevelFilter) {
        let mut builder: env_logger::Builder = colog::default_builder();
        builder.filter_level(level);
        builder.parse_env("RUST_LOG");

        if let Err(e) = builder.try_init() {
            eprintln!("logger already initialized: {e}");
        }
    }
}
