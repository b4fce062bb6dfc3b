/// Result alias used across the application and adapter layers.
/// The converter core returns `ConvertError` directly; everything around it
/// propagates through `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
