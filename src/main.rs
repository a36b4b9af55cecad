use create_vite_ssg::{
    cli::{get_args, get_log_level_from_verbosity, run},
    error::default_error_handler,
};

fn main() {
    let args = get_args();
    let verbosity = args.effective_verbosity();
    let level = get_log_level_from_verbosity(verbosity);
    env_logger::Builder::new().filter_level(level).init();
    log::debug!("log level set to: {level} (verbosity {verbosity})");
    log::debug!("called with args: {args:?}");

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}
