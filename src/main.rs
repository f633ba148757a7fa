use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use opiso::app::App;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let map_path = PathBuf::from(args.next().unwrap_or_else(|| "assets/maps/demo.json".to_string()));
    let tiles_dir = PathBuf::from(args.next().unwrap_or_else(|| "assets/tiles".to_string()));

    info!(map = %map_path.display(), tiles = %tiles_dir.display(), "Starting");
    let app = App::load(&map_path, &tiles_dir)?;
    app.run()?;
    Ok(())
}
