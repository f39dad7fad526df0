//! Price data access port trait.

use crate::domain::error::SigengineError;
use crate::domain::price::PriceSeries;
use std::path::Path;

pub trait DataPort {
    /// Load and validate a price series from `source`.
    fn load_series(&self, source: &Path) -> Result<PriceSeries, SigengineError>;
}
