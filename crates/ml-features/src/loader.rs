use crate::error::LoadError;
use crate::windows::{create_windows, WindowConfig};
use ndarray::{Array1, Array2};
use scaling::MinMaxScaler;
use std::path::PathBuf;

/// Fits a [`MinMaxScaler`] over the row-wise concatenation of every source.
///
/// This is the one offline step of the pipeline: the resulting scaler is
/// shared by all subsequent feature loads and by prediction post-processing,
/// so it has to span the value range of the full corpus.
pub fn build_scaler(sources: &[PathBuf]) -> Result<MinMaxScaler, LoadError> {
    let mut matrices = Vec::with_capacity(sources.len());
    for path in sources {
        matrices.push(dataset::read_raw(path)?);
    }

    Ok(MinMaxScaler::fit(&matrices)?)
}

/// Reads a raw source, normalizes it with the fitted scaler, and windows it
/// into supervised `(features, targets)` pairs.
///
/// Only the first source is read; multi-file batching is not implemented.
/// Additional sources are ignored with a warning.
pub fn load_features(
    sources: &[PathBuf],
    scaler: &MinMaxScaler,
    config: &WindowConfig,
) -> Result<(Array2<f32>, Array1<f32>), LoadError> {
    let path = sources.first().ok_or(LoadError::NoSources)?;
    if sources.len() > 1 {
        tracing::warn!(
            ignored = sources.len() - 1,
            "multiple sources supplied; only the first is read"
        );
    }

    let raw = dataset::read_raw(path)?;
    let scaled = scaler.transform(&raw)?;
    let (x, y) = create_windows(&scaled, config);

    tracing::info!(
        source = %path.display(),
        windows = x.nrows(),
        features = x.ncols(),
        "generated feature windows"
    );

    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn ramp_csv(days: u32) -> NamedTempFile {
        let mut contents = String::from("Date,Sales,Customers,Open,Promo\n");
        for i in 0..days {
            contents.push_str(&format!("2015-01-{:02},{},{},1,0\n", i % 28 + 1, i * 10, 100 + i));
        }
        write_csv(&contents)
    }

    #[test]
    fn scaler_spans_every_supplied_source() {
        let low = write_csv(
            "Date,Sales,Customers,Open,Promo\n\
             2015-01-01,0,50,1,0\n\
             2015-01-02,10,60,1,0\n",
        );
        let high = write_csv(
            "Date,Sales,Customers,Open,Promo\n\
             2015-01-03,5,55,1,1\n\
             2015-01-04,20,65,0,1\n",
        );

        let sources = vec![low.path().to_path_buf(), high.path().to_path_buf()];
        let scaler = build_scaler(&sources).unwrap();

        let sales = scaler.columns()[0];
        assert_eq!(sales.data_min, 0.0);
        assert!((sales.scale - 0.05).abs() < 1e-6);
    }

    #[test]
    fn no_sources_fails_fast() {
        assert!(matches!(build_scaler(&[]), Err(LoadError::Scaling(_))));

        let scaler = {
            let file = ramp_csv(5);
            build_scaler(&[file.path().to_path_buf()]).unwrap()
        };
        let config = WindowConfig::sales_forecast();
        assert!(matches!(
            load_features(&[], &scaler, &config),
            Err(LoadError::NoSources)
        ));
    }

    #[test]
    fn loads_scaled_windows_from_the_first_source() {
        let file = ramp_csv(25);
        let sources = vec![file.path().to_path_buf()];

        let scaler = build_scaler(&sources).unwrap();
        let config = WindowConfig::sales_forecast();
        let (x, y) = load_features(&sources, &scaler, &config).unwrap();

        assert_eq!(x.nrows(), 5);
        assert_eq!(x.ncols(), config.feature_len());
        assert_eq!(y.len(), 5);

        // Everything is normalized into [0, 1].
        for value in x.iter().chain(y.iter()) {
            assert!((0.0..=1.0).contains(value), "unscaled value {value}");
        }

        // The round trip through the scaler recovers the raw sales targets.
        let raw_targets = scaler.invert_sales(&y).unwrap();
        for (i, raw) in raw_targets.iter().enumerate() {
            let expected = ((20 + i) * 10) as f32;
            assert!((raw - expected).abs() < 1e-2, "target {i}: {raw} vs {expected}");
        }
    }
}
