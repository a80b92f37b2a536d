use clap::Parser;
use exifmap::utils::{logger, validation::Validate};
use exifmap::{
    CliConfig, ConfigProvider, LocalStorage, MapEngine, MapRenderer, ScanPipeline, TomlConfig,
};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting exifmap");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if let Some(config_path) = cli.config.clone() {
        tracing::info!("Loading configuration from: {}", config_path);
        let config = match TomlConfig::from_file(&config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", config_path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML");
                std::process::exit(1);
            }
        };
        if let Err(e) = config.validate() {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        run_pipeline(config)?;
        return Ok(());
    }

    // validate() guarantees an input when no config file is given
    let input = cli.input.clone().unwrap_or_default();
    let input = Path::new(&input);

    if input.is_file() {
        run_single(&cli, input)?;
    } else if input.is_dir() {
        run_pipeline(cli)?;
    } else {
        eprintln!("❌ Input path does not exist: {}", input.display());
        std::process::exit(1);
    }

    Ok(())
}

/// Directory mode: scan a photo tree and build the multi-marker viewer.
fn run_pipeline<C: ConfigProvider>(config: C) -> exifmap::Result<()> {
    let renderer = MapRenderer::from_config(&config)?;
    let storage = LocalStorage::new(config.output_dir());
    let pipeline = ScanPipeline::new(storage, config, renderer);
    let engine = MapEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            println!("✅ Photo map written to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Pipeline failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

/// Single-file mode: extract one coordinate and render one map page.
fn run_single(cli: &CliConfig, input: &Path) -> exifmap::Result<()> {
    if cli.verbose {
        if let Some(tags) = exifmap::metadata::read_tag_set(input) {
            for entry in tags.fields() {
                tracing::debug!("{}: {}", entry.name, entry.value);
            }
        }
    }

    match exifmap::extract_coordinate(input)? {
        Some(coordinate) => {
            let renderer = MapRenderer::from_config(cli)?;
            let output = Path::new(cli.output_dir()).join("map.html");
            let written = renderer.write_coordinate(&coordinate, &output)?;
            println!("✅ Map for {} written to: {}", coordinate, written.display());
            Ok(())
        }
        None => {
            eprintln!("❌ No GPS data found in {}", input.display());
            std::process::exit(1);
        }
    }
}
