use crate::columns::FeatureColumn;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily observation for a single store.
///
/// Fields are addressed by name everywhere inside the pipeline; the fixed
/// positional layout only appears when a batch of records is flattened into a
/// matrix via [`SalesRecord::to_row`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub sales: f32,
    pub customers: f32,
    pub open: f32,
    pub promo: f32,
}

impl SalesRecord {
    /// Returns the value of the requested feature column.
    pub fn feature(&self, column: FeatureColumn) -> f32 {
        match column {
            FeatureColumn::Sales => self.sales,
            FeatureColumn::Customers => self.customers,
            FeatureColumn::Open => self.open,
            FeatureColumn::Promo => self.promo,
        }
    }

    /// Flattens the record into the canonical positional layout.
    pub fn to_row(&self) -> [f32; FeatureColumn::COUNT] {
        FeatureColumn::ALL.map(|column| self.feature(column))
    }
}
