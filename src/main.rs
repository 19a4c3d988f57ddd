use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use propanel::cli::CliArgs;
use propanel::config::ShellConfig;

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    propanel::tracing::init();

    let startup = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut config = ShellConfig::load();
    startup.apply(&mut config);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(1000, 700, config);

    event_loop.run_app(&mut app)?;

    Ok(())
}
