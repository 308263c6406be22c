//! Flat Min-Max Scaler.
//!
//! Scales data into a target range using a single global minimum and maximum
//! learned from every element of every array passed to [`FlatMinMaxScaler::fit`].
//! Arrays are pooled, never scaled per column or per axis.
//!
//! The transformation is given by:
//! ```text
//! scale_factor = (high - low) / (X.max() - X.min())
//! minimum      = low - X.min() * scale_factor
//! X_scaled     = clip(X * scale_factor + minimum, low, high)
//! ```
//!
//! # Example
//! ```
//! use flatscaler_rs::preprocessing::{FlatMinMaxScaler, ScalerValues};
//! use ndarray::array;
//!
//! let train = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
//!
//! let mut scaler = FlatMinMaxScaler::<f64>::new((0.0, 1.0));
//! scaler.fit([&train])?;
//! let scaled = scaler.transform(&train)?;
//! assert!((scaled[[1, 2]] - 1.0).abs() < 1e-12);
//!
//! // Carry the fitted state over to a fresh scaler.
//! let values: ScalerValues<f64> = scaler.scaler_values()?;
//! let restored = FlatMinMaxScaler::new(values);
//! let recovered = restored.inverse_transform(&scaled)?;
//! assert!((recovered[[0, 0]] - 1.0).abs() < 1e-12);
//! # Ok::<(), flatscaler_rs::preprocessing::PreprocessingError>(())
//! ```

use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::FlatSource;
use crate::serialization::SerializableParams;
use ndarray::{Array, ArrayBase, Data, DataMut, Dimension};
use num_traits::Float;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, trace, warn};

/// Target interval `[low, high]` that scaled values are mapped and clipped into.
///
/// No ordering is enforced. With `low > high` every transformed value clips
/// to `high`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureRange<F> {
    /// Lower bound of the target range.
    pub low: F,
    /// Upper bound of the target range.
    pub high: F,
}

impl<F: Float> FeatureRange<F> {
    pub fn new(low: F, high: F) -> Self {
        Self { low, high }
    }

    /// Width of the target range, `high - low`.
    pub fn span(&self) -> F {
        self.high - self.low
    }
}

impl<F: Float> Default for FeatureRange<F> {
    fn default() -> Self {
        Self::new(F::zero(), F::one())
    }
}

impl<F: Float> From<(F, F)> for FeatureRange<F> {
    fn from((low, high): (F, F)) -> Self {
        Self::new(low, high)
    }
}

/// Serializable snapshot of a fitted scaler.
///
/// Restoring a scaler from these values makes it ready to transform and
/// inverse-transform immediately, without seeing any data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalerValues<F> {
    /// Target range the scaler maps into.
    pub feature_range: FeatureRange<F>,
    /// Additive offset learned during fit (not the data minimum).
    pub minimum: F,
    /// Multiplicative factor learned during fit.
    pub scale_factor: F,
}

impl<F: Float> ScalerValues<F> {
    pub fn new(feature_range: impl Into<FeatureRange<F>>, minimum: F, scale_factor: F) -> Self {
        Self {
            feature_range: feature_range.into(),
            minimum,
            scale_factor,
        }
    }
}

impl<F> ScalerValues<F>
where
    F: Float + Serialize + DeserializeOwned,
{
    /// Encode as a JSON object.
    pub fn to_json(&self) -> Result<String, PreprocessingError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from a JSON object produced by [`ScalerValues::to_json`].
    pub fn from_json(json: &str) -> Result<Self, PreprocessingError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// How a scaler starts out: with a target range only, or fully fitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalerInit<F> {
    /// Unfitted; `fit` must run before transforming.
    Range(FeatureRange<F>),
    /// Ready to transform with previously learned values.
    Values(ScalerValues<F>),
}

impl<F: Float> From<FeatureRange<F>> for ScalerInit<F> {
    fn from(range: FeatureRange<F>) -> Self {
        ScalerInit::Range(range)
    }
}

impl<F: Float> From<(F, F)> for ScalerInit<F> {
    fn from(range: (F, F)) -> Self {
        ScalerInit::Range(range.into())
    }
}

impl<F: Float> From<ScalerValues<F>> for ScalerInit<F> {
    fn from(values: ScalerValues<F>) -> Self {
        ScalerInit::Values(values)
    }
}

/// Configuration for building a [`FlatMinMaxScaler`] from structured data.
///
/// Exactly one of the two fields must be set.
///
/// ```
/// use flatscaler_rs::preprocessing::FlatMinMaxScalerConfig;
///
/// let config: FlatMinMaxScalerConfig<f64> =
///     serde_json::from_str(r#"{"feature_range": {"low": 5.0, "high": 10.0}}"#).unwrap();
/// let scaler = config.build().unwrap();
/// assert!(!scaler.is_fitted());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatMinMaxScalerConfig<F> {
    /// Target range for a scaler that will be fit later.
    pub feature_range: Option<FeatureRange<F>>,
    /// Previously learned values for a scaler that skips fitting.
    pub scaler_values: Option<ScalerValues<F>>,
}

impl<F: Float> FlatMinMaxScalerConfig<F> {
    /// Build the scaler this configuration describes.
    ///
    /// # Errors
    /// [`PreprocessingError::InvalidArgument`] if both or neither field is set.
    pub fn build(&self) -> Result<FlatMinMaxScaler<F>, PreprocessingError> {
        FlatMinMaxScaler::from_parts(self.feature_range, self.scaler_values)
    }
}

/// Min-max scaler over the pooled elements of one or more arrays.
///
/// A scaler is either built from a [`FeatureRange`] and fit on data, or
/// restored from [`ScalerValues`]. Fitting again overwrites the previous state;
/// a failed fit leaves it untouched.
///
/// Mutating calls (`fit`) take `&mut self`, so sharing one instance across
/// threads requires external synchronization. Separate instances are
/// independent.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatMinMaxScaler<F> {
    feature_range: FeatureRange<F>,
    // (minimum, scale_factor)
    fitted: Option<(F, F)>,
}

impl<F: Float> Default for FlatMinMaxScaler<F> {
    fn default() -> Self {
        Self::new(FeatureRange::<F>::default())
    }
}

impl<F: Float> FlatMinMaxScaler<F> {
    /// Create a scaler from a target range (unfitted) or from learned values.
    pub fn new(init: impl Into<ScalerInit<F>>) -> Self {
        match init.into() {
            ScalerInit::Range(feature_range) => Self {
                feature_range,
                fitted: None,
            },
            ScalerInit::Values(values) => Self {
                feature_range: values.feature_range,
                fitted: Some((values.minimum, values.scale_factor)),
            },
        }
    }

    /// Create a scaler from optional parts, exactly one of which must be present.
    ///
    /// # Errors
    /// [`PreprocessingError::InvalidArgument`] if both or neither are given.
    pub fn from_parts(
        feature_range: Option<FeatureRange<F>>,
        scaler_values: Option<ScalerValues<F>>,
    ) -> Result<Self, PreprocessingError> {
        match (feature_range, scaler_values) {
            (Some(range), None) => Ok(Self::new(range)),
            (None, Some(values)) => Ok(Self::new(values)),
            (None, None) => Err(PreprocessingError::InvalidArgument(
                "either feature_range or scaler_values must be specified".to_string(),
            )),
            (Some(_), Some(_)) => Err(PreprocessingError::InvalidArgument(
                "only one of feature_range or scaler_values can be specified".to_string(),
            )),
        }
    }

    pub fn feature_range(&self) -> FeatureRange<F> {
        self.feature_range
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// Learned additive offset, if fitted.
    pub fn minimum(&self) -> Option<F> {
        self.fitted.map(|(minimum, _)| minimum)
    }

    /// Learned multiplicative factor, if fitted.
    pub fn scale_factor(&self) -> Option<F> {
        self.fitted.map(|(_, scale_factor)| scale_factor)
    }

    /// Fit on the pooled elements of all `arrays`.
    ///
    /// A single global minimum and maximum is taken across every element of
    /// every array. Fitting on `[1, 2, 3]` and `[4, 5, 6]` is identical to
    /// fitting on `[1, 2, 3, 4, 5, 6]`. Ragged data is passed as one argument
    /// by wrapping it in [`Rows`](crate::preprocessing::Rows).
    ///
    /// A zero data range is not rejected: the scale factor becomes infinite
    /// (or NaN) and propagates into later transforms.
    ///
    /// # Errors
    /// - [`PreprocessingError::InvalidData`] if an array contains NaN; the
    ///   error carries the array's 1-based position.
    /// - [`PreprocessingError::EmptyData`] if no arrays are given or one has
    ///   no elements.
    ///
    /// On error the previous state is kept.
    pub fn fit<I>(&mut self, arrays: I) -> Result<&mut Self, PreprocessingError>
    where
        I: IntoIterator,
        I::Item: FlatSource<F>,
    {
        let mut pooled: Option<(F, F)> = None;
        let mut n_arrays = 0usize;
        let mut n_values = 0usize;

        for (index, array) in arrays.into_iter().enumerate() {
            let (array_min, array_max) = extent(&array, index + 1)?;
            pooled = Some(match pooled {
                None => (array_min, array_max),
                Some((data_min, data_max)) => (
                    if array_min < data_min { array_min } else { data_min },
                    if array_max > data_max { array_max } else { data_max },
                ),
            });
            n_arrays += 1;
            n_values += array.len();
        }

        let (data_min, data_max) = pooled.ok_or_else(|| {
            PreprocessingError::EmptyData("fit requires at least one array".to_string())
        })?;

        let data_range = data_max - data_min;
        let scale_factor = self.feature_range.span() / data_range;
        let minimum = self.feature_range.low - data_min * scale_factor;

        debug!(
            arrays = n_arrays,
            values = n_values,
            data_min = as_f64(data_min),
            data_max = as_f64(data_max),
            minimum = as_f64(minimum),
            scale_factor = as_f64(scale_factor),
            "FlatMinMaxScaler fitted"
        );
        if !scale_factor.is_finite() {
            warn!(
                data_range = as_f64(data_range),
                scale_factor = as_f64(scale_factor),
                "Degenerate data range produced a non-finite scale factor"
            );
        }

        self.fitted = Some((minimum, scale_factor));
        Ok(self)
    }

    /// Fit on the pooled `arrays`, then transform `data`.
    pub fn fit_transform<I, S, D>(
        &mut self,
        arrays: I,
        data: &ArrayBase<S, D>,
    ) -> Result<Array<F, D>, PreprocessingError>
    where
        I: IntoIterator,
        I::Item: FlatSource<F>,
        S: Data<Elem = F>,
        D: Dimension,
    {
        self.fit(arrays)?.transform(data)
    }

    /// Scale `data` elementwise and clip into the feature range.
    ///
    /// Values are first raised to `low`, then lowered to `high`. NaN inputs
    /// stay NaN. The output has the shape of the input.
    ///
    /// # Errors
    /// [`PreprocessingError::NotFitted`] if the scaler has no learned values.
    pub fn transform<S, D>(&self, data: &ArrayBase<S, D>) -> Result<Array<F, D>, PreprocessingError>
    where
        S: Data<Elem = F>,
        D: Dimension,
    {
        let (minimum, scale_factor) = self.state("transform")?;
        let FeatureRange { low, high } = self.feature_range;
        trace!(values = data.len(), "FlatMinMaxScaler transform");
        Ok(data.mapv(|x| clip(x * scale_factor + minimum, low, high)))
    }

    /// Like [`FlatMinMaxScaler::transform`], writing into `data`.
    pub fn transform_inplace<S, D>(&self, data: &mut ArrayBase<S, D>) -> Result<(), PreprocessingError>
    where
        S: DataMut<Elem = F>,
        D: Dimension,
    {
        let (minimum, scale_factor) = self.state("transform_inplace")?;
        let FeatureRange { low, high } = self.feature_range;
        trace!(values = data.len(), "FlatMinMaxScaler transform in place");
        data.mapv_inplace(|x| clip(x * scale_factor + minimum, low, high));
        Ok(())
    }

    /// Map scaled values back to the data domain.
    ///
    /// No clipping: inputs outside the feature range give outputs outside the
    /// fitted data range. A zero scale factor yields non-finite values.
    ///
    /// # Errors
    /// [`PreprocessingError::NotFitted`] if the scaler has no learned values.
    pub fn inverse_transform<S, D>(
        &self,
        data: &ArrayBase<S, D>,
    ) -> Result<Array<F, D>, PreprocessingError>
    where
        S: Data<Elem = F>,
        D: Dimension,
    {
        let (minimum, scale_factor) = self.state("inverse_transform")?;
        trace!(values = data.len(), "FlatMinMaxScaler inverse transform");
        Ok(data.mapv(|x| (x - minimum) / scale_factor))
    }

    /// Like [`FlatMinMaxScaler::inverse_transform`], writing into `data`.
    pub fn inverse_transform_inplace<S, D>(
        &self,
        data: &mut ArrayBase<S, D>,
    ) -> Result<(), PreprocessingError>
    where
        S: DataMut<Elem = F>,
        D: Dimension,
    {
        let (minimum, scale_factor) = self.state("inverse_transform_inplace")?;
        trace!(values = data.len(), "FlatMinMaxScaler inverse transform in place");
        data.mapv_inplace(|x| (x - minimum) / scale_factor);
        Ok(())
    }

    /// Snapshot of the learned state for persistence or transfer.
    ///
    /// # Errors
    /// [`PreprocessingError::NotFitted`] if the scaler has no learned values.
    pub fn scaler_values(&self) -> Result<ScalerValues<F>, PreprocessingError> {
        let (minimum, scale_factor) = self.state("scaler_values")?;
        Ok(ScalerValues {
            feature_range: self.feature_range,
            minimum,
            scale_factor,
        })
    }

    /// Pooled data range (`max - min`) implied by the learned scale factor.
    pub fn data_range(&self) -> Result<F, PreprocessingError> {
        let (_, scale_factor) = self.state("data_range")?;
        Ok(self.feature_range.span() / scale_factor)
    }

    fn state(&self, operation: &str) -> Result<(F, F), PreprocessingError> {
        self.fitted.ok_or_else(|| {
            PreprocessingError::NotFitted(format!(
                "{} called before fit and without scaler values",
                operation
            ))
        })
    }
}

impl<F> FlatMinMaxScaler<F>
where
    F: Float + Serialize + DeserializeOwned,
{
    /// Save the learned values to a file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PreprocessingError> {
        let bytes = self.scaler_values()?.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load a ready-to-use scaler from a file written by [`FlatMinMaxScaler::save_to_file`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PreprocessingError> {
        let bytes = std::fs::read(path)?;
        let values = ScalerValues::<F>::from_bytes(&bytes)?;
        Ok(Self::new(values))
    }
}

/// Min and max of one array, rejecting NaN and empty input.
fn extent<F, A>(array: &A, position: usize) -> Result<(F, F), PreprocessingError>
where
    F: Float,
    A: FlatSource<F>,
{
    let mut bounds: Option<(F, F)> = None;
    for value in array.values() {
        if value.is_nan() {
            return Err(PreprocessingError::InvalidData {
                position,
                reason: "contains NaN(s)".to_string(),
            });
        }
        bounds = Some(match bounds {
            None => (value, value),
            Some((lo, hi)) => (
                if value < lo { value } else { lo },
                if value > hi { value } else { hi },
            ),
        });
    }
    bounds.ok_or_else(|| PreprocessingError::EmptyData(format!("array {} has no elements", position)))
}

// Not Float::max/min: those would replace a NaN with the bound.
fn clip<F: Float>(value: F, low: F, high: F) -> F {
    let raised = if value < low { low } else { value };
    if raised > high {
        high
    } else {
        raised
    }
}

fn as_f64<F: Float>(value: F) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
