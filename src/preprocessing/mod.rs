//! Data preprocessing transformers for machine learning pipelines.
//!
//! # Design Philosophy
//!
//! - **Pooled statistics**: Scalers learn from every element of every input
//!   array at once, regardless of shape.
//! - **Shape agnostic**: Transforms accept `ndarray` arrays of any dimension
//!   and return arrays of the same shape.
//! - **Serializable**: Learned values are plain records that can be saved and
//!   restored without re-fitting.
//!
//! # Core Traits
//!
//! - [`FlatSource`]: Anything whose scalar elements can be pooled for fitting
//!
//! # Available Transformers
//!
//! ## Scaling
//! - [`FlatMinMaxScaler`]: Scale to a target range with one global min/max
//!
//! # Example
//!
//! ```no_run
//! use flatscaler_rs::preprocessing::FlatMinMaxScaler;
//! use ndarray::array;
//!
//! let train = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
//!
//! // Create and fit a scaler
//! let mut scaler = FlatMinMaxScaler::new((0.0, 1.0));
//! scaler.fit([&train])?;
//!
//! // Save for later use
//! scaler.save_to_file("scaler.bin")?;
//!
//! // Later, load and transform new data
//! let loaded = FlatMinMaxScaler::<f64>::load_from_file("scaler.bin")?;
//! let scaled = loaded.transform(&train)?;
//! # Ok::<(), flatscaler_rs::preprocessing::PreprocessingError>(())
//! ```

pub mod error;
pub mod scaling;
pub mod traits;

// Re-export main types
pub use error::PreprocessingError;
pub use scaling::{
    FeatureRange, FlatMinMaxScaler, FlatMinMaxScalerConfig, ScalerInit, ScalerValues,
};
pub use traits::{FlatSource, Rows};
