use serde::{Deserialize, Serialize};

/// Name of the date column attached to every raw data source.
///
/// The date is parsed and carried on each record but is not itself a model
/// feature.
pub const DATE_COLUMN: &str = "Date";

/// The four feature columns of the sales dataset, in their canonical order.
///
/// The declaration order is load-bearing: it determines the positional layout
/// of every raw matrix, the per-column scaler parameters, and the continuous
/// features appended to each window. Code should address columns through this
/// enum and only fall back to `index()` at the array boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureColumn {
    Sales,
    Customers,
    Open,
    Promo,
}

impl FeatureColumn {
    /// All feature columns in canonical order.
    pub const ALL: [FeatureColumn; 4] = [
        FeatureColumn::Sales,
        FeatureColumn::Customers,
        FeatureColumn::Open,
        FeatureColumn::Promo,
    ];

    /// Number of feature columns in a raw matrix.
    pub const COUNT: usize = Self::ALL.len();

    /// The continuous features appended at the target step, in order.
    pub const CONTINUOUS: [FeatureColumn; 2] = [FeatureColumn::Open, FeatureColumn::Promo];

    /// The column header as it appears in the raw data sources.
    pub const fn name(self) -> &'static str {
        match self {
            FeatureColumn::Sales => "Sales",
            FeatureColumn::Customers => "Customers",
            FeatureColumn::Open => "Open",
            FeatureColumn::Promo => "Promo",
        }
    }

    /// Position of this column in the canonical matrix layout.
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_drives_positional_indexing() {
        assert_eq!(FeatureColumn::Sales.index(), 0);
        assert_eq!(FeatureColumn::Customers.index(), 1);
        assert_eq!(FeatureColumn::Open.index(), 2);
        assert_eq!(FeatureColumn::Promo.index(), 3);

        for (position, column) in FeatureColumn::ALL.iter().enumerate() {
            assert_eq!(column.index(), position);
        }
    }

    #[test]
    fn continuous_features_follow_the_window_columns() {
        let names: Vec<&str> = FeatureColumn::CONTINUOUS.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Open", "Promo"]);
    }
}
