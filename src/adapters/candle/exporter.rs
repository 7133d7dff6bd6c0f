//! Default graph exporter
//!
//! Writes the export artifact: every parameter tensor in f32 plus a metadata
//! header describing the graph (architecture, input signature, quantization
//! and sparsity markers). The byte-level serialization is delegated wholesale
//! to the safetensors crate; swapping in a different interchange emitter means
//! providing another [`GraphExporter`] implementation.

use crate::adapters::traits::GraphExporter;
use crate::domain::{Model, Result, VitexError};
use candle_core::{DType, Tensor};
use safetensors::tensor::TensorView;
use safetensors::Dtype;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Graph description embedded in the artifact's metadata header
#[derive(Debug, Serialize)]
struct GraphMetadata<'a> {
    architecture: &'a str,
    num_classes: usize,
    input_shape: Vec<usize>,
    quantized: bool,
    qat_observers: bool,
    sparsity: Option<f64>,
}

/// Graph exporter over the candle tensor runtime
#[derive(Debug, Default)]
pub struct CandleGraphExporter;

impl CandleGraphExporter {
    /// Creates a new exporter
    pub fn new() -> Self {
        Self
    }
}

impl GraphExporter for CandleGraphExporter {
    fn export(
        &self,
        model: &Model,
        sample: &Tensor,
        path: &Path,
        convert_qat: bool,
    ) -> Result<()> {
        let fold_observers = convert_qat && model.is_qat();
        if fold_observers {
            tracing::info!("Converting QAT graph to a quantized graph");
        }

        let metadata = GraphMetadata {
            architecture: &model.config.model,
            num_classes: model.config.num_classes,
            input_shape: sample.dims().to_vec(),
            quantized: fold_observers,
            qat_observers: model.is_qat() && !fold_observers,
            sparsity: model.sparsity.as_ref().map(|s| s.final_sparsity),
        };

        let mut header = HashMap::new();
        header.insert("graph".to_string(), serde_json::to_string(&metadata)?);
        header.insert(
            "producer".to_string(),
            format!("vitex {}", env!("CARGO_PKG_VERSION")),
        );

        // Materialize every parameter as little-endian f32 bytes
        let mut buffers: Vec<(String, Vec<usize>, Vec<u8>)> =
            Vec::with_capacity(model.tensors.len());
        for (name, tensor) in &model.tensors {
            let dims = tensor.dims().to_vec();
            let values: Vec<f32> = tensor.to_dtype(DType::F32)?.flatten_all()?.to_vec1()?;
            let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
            buffers.push((name.clone(), dims, bytes));
        }

        let views: Vec<(&str, TensorView<'_>)> = buffers
            .iter()
            .map(|(name, dims, bytes)| {
                TensorView::new(Dtype::F32, dims.clone(), bytes)
                    .map(|view| (name.as_str(), view))
                    .map_err(|e| VitexError::Export(format!("Failed to frame tensor {name}: {e}")))
            })
            .collect::<Result<_>>()?;

        safetensors::serialize_to_file(views, &Some(header), path).map_err(|e| {
            VitexError::Export(format!("Failed to write graph {}: {e}", path.display()))
        })?;

        tracing::info!(
            path = %path.display(),
            tensors = model.tensor_count(),
            quantized = fold_observers,
            "Graph exported"
        );
        Ok(())
    }
}
