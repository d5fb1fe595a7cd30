fn main() {
    if let Err(e) = game_catalog_lib::run() {
        log::error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
