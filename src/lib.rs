//! # flatscaler-rs
//!
//! Min-max feature scaling over pooled arrays, with fit state that can be
//! persisted and restored without re-fitting.
//!
//! ## Core Design Principles
//!
//! - **One global range**: All arrays passed to `fit` are treated as a single
//!   flat dataset; there is no per-column or per-axis scaling.
//! - **Explicit construction modes**: A scaler starts either from a target range
//!   (and must be fit) or from previously learned values (and is ready at once).
//! - **Faithful arithmetic**: Degenerate inputs such as a zero data range are not
//!   rejected; they surface as non-finite values exactly as the arithmetic gives.
//!
//! ## Quick Start
//!
//! ```rust
//! use flatscaler_rs::preprocessing::{FlatMinMaxScaler, ScalerValues};
//! use ndarray::array;
//!
//! let mut scaler = FlatMinMaxScaler::new((5.0, 10.0));
//! scaler.fit([array![1.0, 2.0, 3.0], array![4.0, 5.0, 6.0]]).unwrap();
//!
//! let values = scaler.scaler_values().unwrap();
//! assert_eq!(values.minimum, 4.0);
//! assert_eq!(values.scale_factor, 1.0);
//!
//! let restored = FlatMinMaxScaler::new(values);
//! let scaled = restored.transform(&array![[1.0, 6.0]]).unwrap();
//! assert_eq!(scaled, array![[5.0, 10.0]]);
//! ```
//!
//! ## Module Structure
//!
//! - `preprocessing` — Scalers, their learned values and configuration
//! - `serialization` — Parameter persistence formats

/// Data preprocessing transformers.
pub mod preprocessing;

/// Parameter persistence and format conversion utilities.
pub mod serialization;

pub use preprocessing::{FlatMinMaxScaler, PreprocessingError, ScalerValues};
