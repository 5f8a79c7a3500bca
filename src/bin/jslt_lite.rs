fn main() {
    env_logger::init();
    if let Err(err) = jslt_lite::cli::run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
