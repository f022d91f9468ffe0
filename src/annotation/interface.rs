use crate::annotation::model::AnnotationSet;

pub trait AnnotationReader {
    fn read(&self) -> Result<AnnotationSet, Box<dyn std::error::Error>>;
}
