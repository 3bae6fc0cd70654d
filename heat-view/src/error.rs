use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ViewError {
    #[error("view '{0}' has no data to render")]
    EmptyDataset(String),
}
