fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    log::info!("Command-line arguments: {:?}", args);

    let scale_arg = args.get(1).map(String::as_str);
    let Some(scale) = dwarfare::parse_scale(scale_arg) else {
        eprintln!(
            "Invalid scale '{}', expected 1 to {}. Usage: dwarfare [SCALE], for example: dwarfare 3",
            scale_arg.unwrap_or_default(),
            dwarfare::MAX_SCALE
        );
        std::process::exit(1);
    };

    if let Err(err) = dwarfare::run(scale) {
        log::error!("Dwarfare stopped with an error: {:#}", err);
        std::process::exit(1);
    }
}
