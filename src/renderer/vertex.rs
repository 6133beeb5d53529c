//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex with position, color and optional sprite texture coordinates
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
    pub uv: [f32; 2],
    /// 1.0 samples the sprite atlas, 0.0 draws flat color
    pub textured: f32,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
            uv: [0.0, 0.0],
            textured: 0.0,
        }
    }

    pub const fn textured(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y],
            color: [1.0, 1.0, 1.0, 1.0],
            uv: [u, v],
            textured: 1.0,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const F2: u64 = std::mem::size_of::<[f32; 2]>() as u64;
        const F4: u64 = std::mem::size_of::<[f32; 4]>() as u64;
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: F2,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: F2 + F4,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: F2 + F4 + F2,
                    shader_location: 3,
                    format: wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}

/// Colors for game elements (used when no sprite is available)
pub mod colors {
    pub const SKY: [f32; 4] = [0.53, 0.81, 0.92, 1.0];
    pub const PLAYER: [f32; 4] = [1.0, 0.39, 0.39, 1.0];
    pub const PLAYER_SHOOTING: [f32; 4] = [1.0, 0.6, 0.2, 1.0];
    pub const PLATFORM_NORMAL: [f32; 4] = [0.13, 0.55, 0.13, 1.0];
    pub const PLATFORM_MOVING: [f32; 4] = [0.2, 0.4, 0.9, 1.0];
    pub const PLATFORM_BREAKABLE: [f32; 4] = [0.55, 0.35, 0.17, 1.0];
    pub const PLATFORM_SPRING: [f32; 4] = [0.95, 0.85, 0.2, 1.0];
    pub const MONSTER: [f32; 4] = [0.5, 0.1, 0.6, 1.0];
    pub const PROJECTILE: [f32; 4] = [0.1, 0.1, 0.1, 1.0];
    pub const SCORE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const GAME_OVER: [f32; 4] = [1.0, 0.0, 0.0, 0.5];
}
