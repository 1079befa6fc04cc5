use crate::rational::Category;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("{0} has no finite ratio representation")]
    NotFinite(Category),
}
