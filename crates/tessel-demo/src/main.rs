//! Headless tessel demo.
//!
//! Generates the three primitives, draws them side by side into an offscreen
//! texture for a fixed number of frames, reports frame timing, then disposes
//! everything and checks nothing leaked.

mod config;
mod pipeline;

use anyhow::{Context, Result};
use tessel_engine::device::{Gpu, GpuInit};
use tessel_engine::logging::{init_logging, LoggingConfig};
use tessel_engine::mesh::{generate_plane, generate_textured_quad, generate_unit_sphere, Mesh};
use tessel_engine::time::Timer;

use config::DemoConfig;
use pipeline::FlatPipeline;

const TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = DemoConfig::from_env();
    log::info!("{config:?}");

    let gpu = Gpu::new_blocking(GpuInit::default()).context("GPU initialization failed")?;
    let alloc = gpu.allocator();

    let meshes = [
        generate_plane(&alloc)?,
        generate_textured_quad(&alloc)?,
        generate_unit_sphere(&alloc, config.sphere_t, config.sphere_s)?,
    ];
    for mesh in &meshes {
        log::info!(
            "{:>14}: {:>6} vertices {:>6} indices",
            mesh.label(),
            mesh.num_vertices(),
            mesh.num_indices()
        );
    }
    log::info!("{} buffers, {} bytes on the GPU", alloc.live_buffers(), alloc.live_bytes());

    let pipelines: Vec<FlatPipeline> = meshes
        .iter()
        .map(|m| FlatPipeline::new(gpu.device(), m.vertex_layout(), TARGET_FORMAT))
        .collect();

    let target = gpu.device().create_texture(&wgpu::TextureDescriptor {
        label: Some("tessel demo target"),
        size: wgpu::Extent3d {
            width: config.target_size,
            height: config.target_size,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: TARGET_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = target.create_view(&wgpu::TextureViewDescriptor::default());

    let mut timer = Timer::new();
    let mut worst_dt = 0.0f32;

    for _ in 0..config.frames {
        render_frame(&gpu, &view, &meshes, &pipelines);

        worst_dt = worst_dt.max(timer.interval());
        let fps = timer.fps();
        if timer.is_time_passed(1.0) {
            log::info!("{fps:.1} fps");
        }
    }

    let elapsed = timer.time();
    log::info!(
        "{} frames in {elapsed:.3}s ({:.1} fps avg, worst frame {:.2} ms)",
        config.frames,
        config.frames as f32 / elapsed.max(f32::EPSILON),
        worst_dt * 1000.0
    );

    for mesh in meshes {
        mesh.dispose();
    }
    anyhow::ensure!(
        alloc.live_buffers() == 0,
        "{} buffers still alive after dispose",
        alloc.live_buffers()
    );

    Ok(())
}

fn render_frame(gpu: &Gpu, view: &wgpu::TextureView, meshes: &[Mesh], pipelines: &[FlatPipeline]) {
    let mut encoder = gpu
        .device()
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("tessel demo encoder"),
        });

    {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("tessel demo pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: 0.02,
                        g: 0.02,
                        b: 0.03,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        // Instance index doubles as the horizontal slot in the shader.
        for (slot, (mesh, pipeline)) in meshes.iter().zip(pipelines).enumerate() {
            let slot = slot as u32;
            pass.set_pipeline(pipeline.raw());
            mesh.draw(&mut pass, slot..slot + 1);
        }
    }

    gpu.queue().submit(std::iter::once(encoder.finish()));
}
