//! Scaling transformers for feature normalization.
//!
//! # Available Transformers
//!
//! | Transformer | Description | Use Case |
//! |-------------|-------------|----------|
//! | [`FlatMinMaxScaler`] | Scale to a target range using one global min/max over pooled arrays | Homogeneous data split across several arrays |
//!
//! # Example
//!
//! ```
//! use flatscaler_rs::preprocessing::scaling::FlatMinMaxScaler;
//! use ndarray::array;
//!
//! let mut scaler = FlatMinMaxScaler::new((-1.0, 1.0));
//! scaler.fit([array![0.0, 5.0], array![10.0]]).unwrap();
//! let scaled = scaler.transform(&array![0.0, 5.0, 10.0]).unwrap();
//! assert_eq!(scaled, array![-1.0, 0.0, 1.0]);
//! ```

pub mod flat_minmax;

pub use flat_minmax::{
    FeatureRange, FlatMinMaxScaler, FlatMinMaxScalerConfig, ScalerInit, ScalerValues,
};
