use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use flatrast::window::{FrameLimiter, Window, WindowEvent};
use flatrast::{Command, Config, Engine};

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::parse();

    let mut engine = Engine::from_config(&config);
    match &config.mesh {
        Some(path) => engine
            .load_mesh(path)
            .with_context(|| format!("could not load mesh {}", path.display()))?,
        None => engine.load_cube_mesh(),
    }

    let mut window = Window::new("flatrast", config.width, config.height)
        .map_err(anyhow::Error::msg)
        .context("could not open window")?;
    let mut frame_limiter = FrameLimiter::new(&window, config.frame_time());

    info!(
        "rendering {} vertices / {} faces at {}x{}, {} fps",
        engine.mesh().vertices().len(),
        engine.mesh().faces().len(),
        config.width,
        config.height,
        config.fps
    );

    'frame: loop {
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => break 'frame,
                WindowEvent::Resize(width, height) => {
                    window.resize(width, height).map_err(anyhow::Error::msg)?;
                    engine.resize(width, height);
                }
                WindowEvent::KeyDown(key) => {
                    if !engine.apply(Command::from(key)) {
                        break 'frame;
                    }
                }
            }
        }

        frame_limiter.wait_and_get_delta(&window);

        engine.update().context("frame update failed")?;
        engine.render();

        window
            .present(engine.frame_buffer())
            .map_err(anyhow::Error::msg)
            .context("could not present frame")?;
    }

    info!("exiting");
    Ok(())
}
