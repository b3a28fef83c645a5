use crate::stage::TransformMode;

/// WGSL program implementing the vertex stage for one mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ShaderVariant {
    pub mode: TransformMode,
    pub label: &'static str,
    pub source: &'static str,
    pub vertex_entry: &'static str,
    pub fragment_entry: &'static str,
}

impl ShaderVariant {
    pub const MATRIX: ShaderVariant = ShaderVariant {
        mode: TransformMode::Matrix,
        label: "cncview line matrix shader",
        source: include_str!("shaders/line_matrix.wgsl"),
        vertex_entry: "vs_main",
        fragment_entry: "fs_main",
    };

    pub const SCALE: ShaderVariant = ShaderVariant {
        mode: TransformMode::Scale,
        label: "cncview line scale shader",
        source: include_str!("shaders/line_scale.wgsl"),
        vertex_entry: "vs_main",
        fragment_entry: "fs_main",
    };

    #[inline]
    pub const fn for_mode(mode: TransformMode) -> Self {
        match mode {
            TransformMode::Matrix => Self::MATRIX,
            TransformMode::Scale => Self::SCALE,
        }
    }

    pub fn module_descriptor(&self) -> wgpu::ShaderModuleDescriptor<'static> {
        wgpu::ShaderModuleDescriptor {
            label: Some(self.label),
            source: wgpu::ShaderSource::Wgsl(self.source.into()),
        }
    }
}

/// Line-strip topology, no culling.
pub fn line_primitive_state() -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology: wgpu::PrimitiveTopology::LineStrip,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: None,
        polygon_mode: wgpu::PolygonMode::Fill,
        unclipped_depth: false,
        conservative: false,
    }
}

/// `src * a + dst * (1 - a)` for straight-alpha vertex colors.
pub fn straight_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}
