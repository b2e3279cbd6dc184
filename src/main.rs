use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = wddscan::cli::run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
