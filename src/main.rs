use anomaly_evaluation::AnomalyEvaluation;
use annotation::impl_fake::AnnotationReaderFake;
use annotation::interface::AnnotationReader;
use classifier::impl_rbf_centroid::OneClassRbfCentroid;
use config::Config;
use feature_extractor::impl_fake::FeatureExtractorFake;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use report::impl_console::ReportConsole;
use scaler::impl_standard::StandardScaler;
use std::sync::Arc;

mod annotation;
mod anomaly_evaluation;
mod classifier;
mod config;
mod dataset;
mod error;
mod feature_extractor;
mod grid_search;
mod library;
mod metrics;
mod report;
mod scaler;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn Logger> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let annotation_reader = AnnotationReaderFake::demo(logger.clone());

    // the fake extractor renders the annotated defects into its frames
    let annotations = annotation_reader.read()?;
    let feature_extractor = FeatureExtractorFake::new(
        logger.clone(),
        config.frame_width,
        config.cell_width,
        config.feature_count,
    )
    .with_anomalies_from(&annotations);

    let classifier = OneClassRbfCentroid::new(logger.clone());

    let mut evaluation = AnomalyEvaluation::new(
        config,
        logger,
        Box::new(annotation_reader),
        Box::new(feature_extractor),
        Box::new(StandardScaler::new()),
        Box::new(classifier),
        Box::new(ReportConsole::new()),
    );

    evaluation.run()?;

    Ok(())
}
