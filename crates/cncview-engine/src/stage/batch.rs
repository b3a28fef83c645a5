use super::{transform, ClipVertex, TransformConfig, VertexAttributes};

/// Transforms an attribute stream in buffer order.
///
/// The output has one entry per input vertex, in the same order.
pub fn transform_stream(vertices: &[VertexAttributes], cfg: &TransformConfig) -> Vec<ClipVertex> {
    let mut out = Vec::with_capacity(vertices.len());
    transform_into(vertices, cfg, &mut out);
    out
}

/// Like [`transform_stream`], but refills `out` so its allocation is reused
/// across draw calls.
pub fn transform_into(
    vertices: &[VertexAttributes],
    cfg: &TransformConfig,
    out: &mut Vec<ClipVertex>,
) {
    out.clear();
    out.extend(vertices.iter().map(|attrs| transform(*attrs, cfg)));

    log::trace!("vertex stage: {} vertices ({} mode)", vertices.len(), cfg.mode());
}
