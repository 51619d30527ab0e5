use expbuilder::cli::PlayerArgs;
use expbuilder::entities::Experiment;
use expbuilder::player::{
    self, Bootstrap, DEBUG, DisplayMode, ExperimentSource, FileDialogSource, FixedSource,
};
use expbuilder::{config, logging};

use clap::Parser;
use log::{debug, error, info};

fn main() -> anyhow::Result<()> {
    let args = PlayerArgs::parse();

    let path_config = config::PathConfig::from_env_and_cli(args.config_dir.clone());
    if let Err(e) = config::ensure_dirs(&path_config) {
        eprintln!("Warning: Failed to create application directories: {:#}", e);
    }

    logging::init(
        args.verbosity,
        args.log_file.as_ref(),
        "explayer.log",
        &path_config,
    )?;
    debug!("Command-line args: {:?}", args);

    let mode = DisplayMode::resolve(DEBUG, args.windowed, args.fullscreen);

    let mut source: Box<dyn ExperimentSource> = match args.file_path {
        Some(path) => Box::new(FixedSource::new(path)),
        None => Box::new(FileDialogSource),
    };

    match player::bootstrap(source.as_mut(), |path| Experiment::load_experiment(path)) {
        Ok(Bootstrap::Cancelled) => {
            info!("Cancelled, exiting");
            Ok(())
        }
        Ok(Bootstrap::Ready(controller)) => player::run(controller, mode),
        Err(e) => {
            error!("{:#}", e);
            Err(e)
        }
    }
}
