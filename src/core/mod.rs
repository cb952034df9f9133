pub mod cleaning;
pub mod columns;
pub mod dialect;
pub mod etl;
pub mod ids;
pub mod parser;
pub mod pipeline;
pub mod scanner;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{ProductRecord, SourceFile, StoreOffer, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
