use crate::annotation::indexer::AnnotationIndexer;
use crate::annotation::interface::AnnotationReader;
use crate::annotation::labels::{GroundTruth, LabelSynthesizer};
use crate::classifier::interface::OneClassClassifier;
use crate::config::{Config, Mode};
use crate::dataset::{self, FeatureSet};
use crate::feature_extractor::interface::FeatureExtractor;
use crate::grid_search::{GridSearch, GridSearchResult};
use crate::library::logger::interface::Logger;
use crate::metrics::{self, Metrics};
use crate::report::interface::Report;
use crate::scaler::interface::Scaler;
use std::sync::Arc;


/// Everything a classifier run needs. Built once, shared by every run.
pub struct PreparedData {
    pub features: FeatureSet,
    pub truth: GroundTruth,
}

#[derive(Debug)]
#[allow(dead_code)]
pub enum Outcome {
    FitPredict(Metrics),
    GridSearch(GridSearchResult),
}

pub struct AnomalyEvaluation {
    config: Config,
    logger: Arc<dyn Logger>,
    annotation_reader: Box<dyn AnnotationReader>,
    feature_extractor: Box<dyn FeatureExtractor>,
    scaler: Box<dyn Scaler>,
    classifier: Box<dyn OneClassClassifier>,
    report: Box<dyn Report>,
}

impl AnomalyEvaluation {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger>,
        annotation_reader: Box<dyn AnnotationReader>,
        feature_extractor: Box<dyn FeatureExtractor>,
        scaler: Box<dyn Scaler>,
        classifier: Box<dyn OneClassClassifier>,
        report: Box<dyn Report>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("anomaly_evaluation"),
            annotation_reader,
            feature_extractor,
            scaler,
            classifier,
            report,
        }
    }

    pub fn run(&mut self) -> Result<Outcome, Box<dyn std::error::Error>> {
        let data = self.prepare()?;

        match self.config.mode {
            Mode::FitPredict => Ok(Outcome::FitPredict(self.fit_predict(&data)?)),
            Mode::GridSearch => Ok(Outcome::GridSearch(self.grid_search(&data)?)),
        }
    }

    pub fn prepare(&mut self) -> Result<PreparedData, Box<dyn std::error::Error>> {
        let annotations = self.annotation_reader.read()?;

        let split = dataset::split_normal_frames(
            &annotations.normal_frames,
            annotations.anomaly_frames.len(),
            self.config.seed,
        )?;
        self.logger.info(&format!(
            "Split normal frames: {} train, {} test",
            split.train.len(),
            split.test.len()
        ))?;

        let train = dataset::to_matrix(&self.feature_extractor.fit_transform(&split.train)?)?;
        let samples_per_frame = dataset::samples_per_frame(train.nrows(), split.train.len())?;
        let cell_width = self.feature_extractor.cell_width();
        let normal_test = dataset::to_matrix(&self.feature_extractor.transform(&split.test)?)?;
        let anomaly_test =
            dataset::to_matrix(&self.feature_extractor.transform(&annotations.anomaly_frames)?)?;

        self.scaler.fit(&train)?;
        let features = FeatureSet {
            train: self.scaler.transform(&train)?,
            normal_test: self.scaler.transform(&normal_test)?,
            anomaly_test: self.scaler.transform(&anomaly_test)?,
        };
        self.logger.info(&format!(
            "XTrain shape = {} x {}, {} samples per frame, cell width {}",
            features.train.nrows(),
            features.train.ncols(),
            samples_per_frame,
            cell_width
        ))?;

        let indexer = AnnotationIndexer::new(cell_width, samples_per_frame)?;
        let truth = LabelSynthesizer::new(indexer).synthesize(&annotations)?;
        self.logger.info(&format!(
            "Ground truth: {} anomaly samples in {} anomalies, {} unclear samples",
            truth.anomaly_sample_count(),
            truth.anomalies.len(),
            truth.unclear.len()
        ))?;

        Ok(PreparedData { features, truth })
    }

    /// Single fit with the configured hyperparameters. Reports train metrics,
    /// then test metrics.
    pub fn fit_predict(&mut self, data: &PreparedData) -> Result<Metrics, Box<dyn std::error::Error>> {
        let features = &data.features;
        self.classifier
            .fit(&features.train, self.config.fit_gamma, self.config.fit_nu)?;

        let train_predicted = self.classifier.predict(&features.train)?;
        let train = metrics::false_positive_frames(&train_predicted, data.truth.samples_per_frame)?;
        self.report.false_positive_frames("TRAIN", &train)?;

        let normal_predicted = self.classifier.predict(&features.normal_test)?;
        let anomaly_predicted = self.classifier.predict(&features.anomaly_test)?;
        let test = metrics::evaluate(&normal_predicted, &anomaly_predicted, &data.truth)?;
        self.report.metrics("TEST", &test)?;

        Ok(test)
    }

    pub fn grid_search(&mut self, data: &PreparedData) -> Result<GridSearchResult, Box<dyn std::error::Error>> {
        let search = GridSearch::new(
            self.logger.clone(),
            self.config.gamma_values.clone(),
            self.config.nu_values.clone(),
        );
        let result = search.run(self.classifier.as_mut(), &data.features, &data.truth)?;

        self.report
            .ranked(&result.ranked(self.config.max_fp_frames_percentage))?;

        std::fs::write(
            &self.config.grid_search_csv_path,
            result.to_delimited(&self.config.csv_separator),
        )?;
        self.logger.info(&format!(
            "Wrote grid search results to {}",
            self.config.grid_search_csv_path.display()
        ))?;

        Ok(result)
    }
}
