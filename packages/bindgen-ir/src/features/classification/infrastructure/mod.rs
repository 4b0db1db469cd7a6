mod classifier;
mod overload;
mod shape;

pub use classifier::MethodClassifier;
pub use overload::normalize_overload;
pub use shape::ShapeDetector;
