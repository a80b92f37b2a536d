use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Runs a pipeline's three stages in order with stage-level logging.
pub struct MapEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> MapEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Scanning for geotagged photos...");
        let records = self.pipeline.extract()?;
        tracing::info!("Found {} photos with GPS data", records.len());

        tracing::info!("Preparing map data...");
        let result = self.pipeline.transform(records)?;
        tracing::info!("Prepared {} map markers", result.locations.len());

        tracing::info!("Writing map files...");
        let output_path = self.pipeline.load(result)?;
        tracing::info!("Map written to: {}", output_path);

        Ok(output_path)
    }
}
