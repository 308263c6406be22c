//! Fit a flat min-max scaler on several arrays, persist its learned values,
//! and restore them into a fresh scaler for inference.
//!
//! Run with: cargo run --example persist_scaler
//! Set RUST_LOG=debug to see the fit parameters as they are learned.

use flatscaler_rs::preprocessing::{FlatMinMaxScaler, FlatMinMaxScalerConfig, ScalerValues};
use ndarray::array;
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Flat Min-Max Scaler ===\n");

    // 1. Build the scaler from configuration
    let config: FlatMinMaxScalerConfig<f64> =
        serde_json::from_str(r#"{"feature_range": {"low": 0.0, "high": 1.0}}"#)?;
    let mut scaler = config.build()?;

    // 2. Fit on training and validation splits together
    let train = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let validation = array![[2.5, 3.5], [0.5, 6.5]];
    scaler.fit([&train, &validation])?;

    let values = scaler.scaler_values()?;
    println!(
        "Learned minimum={:.4}, scale_factor={:.4}, data_range={:.4}",
        values.minimum,
        values.scale_factor,
        scaler.data_range()?
    );

    // 3. Persist the learned values
    let json = values.to_json()?;
    println!("Persisted values: {}", json);

    let path = std::env::temp_dir().join("flatscaler_demo.bin");
    scaler.save_to_file(&path)?;

    // 4. Restore and use for inference
    let restored = FlatMinMaxScaler::new(ScalerValues::<f64>::from_json(&json)?);
    let loaded = FlatMinMaxScaler::<f64>::load_from_file(&path)?;

    let scaled = restored.transform(&train)?;
    println!("\nScaled training data:\n{:.4}", scaled);
    println!("\nRecovered training data:\n{:.4}", loaded.inverse_transform(&scaled)?);

    let unseen = array![-1.0, 3.0, 10.0];
    println!("\nUnseen values clipped into range: {:.4}", restored.transform(&unseen)?);

    std::fs::remove_file(path).ok();
    Ok(())
}
