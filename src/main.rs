use log::LevelFilter;

use crate::abs::App;
use crate::config::Config;
use crate::error::Error;
use crate::render::Scene;

mod abs;
mod config;
mod error;
mod logger;
mod render;

fn main() {
    let config = Config::load();

    let level = match &config {
        Ok((config, _)) => config.log_level,
        Err(_) => LevelFilter::Info,
    };
    if let Err(e) = logger::init(level) {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }

    let result = config.and_then(|(config, source)| {
        match source {
            Some(path) => log::info!("using config {}", path.display()),
            None => log::info!("no config file found, using defaults"),
        }
        run(&config)
    });

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Error> {
    let mut app = App::new(&config.window)?;

    let (renderer, version) = app.gl_info();
    log::info!("Renderer: {renderer}");
    log::info!("OpenGL version supported {version}");

    app.setup_pipeline(config.clear_color);

    let scene = Scene::new(&app.gl, &config.shaders)?;

    let frames = render::run(&mut app, &scene);
    log::debug!("window closed after {frames} frames");

    Ok(())
}
