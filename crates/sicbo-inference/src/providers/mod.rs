//! Pick model providers.

pub mod onnx_model;

pub use onnx_model::OnnxModel;
