use log::LevelFilter;

/// Inicializa el logger nativo. `RUST_LOG` tiene prioridad si está definido;
/// si no, nivel Debug o Info según `debug_enabled`.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // try_init: los tests pueden llamar esto más de una vez
    let _ = builder.try_init();
}
