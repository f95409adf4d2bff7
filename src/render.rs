use crate::constants::CLEAR_COLOR;
use crate::error::RenderError;
use crate::uniforms::{EffectSurface, EffectUniforms};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use web_sys as web;

mod quad;
use quad::{create_quad_resources, QuadResources};

pub struct GpuState {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    quad: QuadResources,
    clear_color: wgpu::Color,
    // Set by the device-lost callback or a lost surface; never cleared
    lost: Arc<AtomicBool>,
}

impl GpuState {
    pub async fn new(canvas: web::HtmlCanvasElement) -> Result<Self, RenderError> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| RenderError::Surface(e.to_string()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderError::NoAdapter)?;
        log::info!("[gpu] adapter: {:?}", adapter.get_info().name);
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| RenderError::Device(e.to_string()))?;

        let lost = Arc::new(AtomicBool::new(false));
        let lost_flag = lost.clone();
        device.set_device_lost_callback(move |reason, message| {
            log::error!("[gpu] device lost ({:?}): {}", reason, message);
            lost_flag.store(true, Ordering::SeqCst);
        });

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| RenderError::Surface("no supported surface format".into()))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let quad = build_program(&device, format).await?;

        Ok(Self {
            canvas,
            surface,
            device,
            queue,
            config,
            quad,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: CLEAR_COLOR[3],
            },
            lost,
        })
    }

    #[inline]
    pub fn is_lost(&self) -> bool {
        self.lost.load(Ordering::SeqCst)
    }

    fn ensure_live(&self) -> Result<(), RenderError> {
        if self.is_lost() {
            Err(RenderError::ContextLost)
        } else {
            Ok(())
        }
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.config.width || height != self.config.height {
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn acquire_frame(&self) -> Result<wgpu::SurfaceTexture, RenderError> {
        self.surface.get_current_texture().map_err(|e| match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::OutOfMemory => {
                self.lost.store(true, Ordering::SeqCst);
                RenderError::ContextLost
            }
            other => RenderError::Frame(other.to_string()),
        })
    }
}

impl EffectSurface for GpuState {
    fn pixel_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn write_uniforms(&mut self, uniforms: &EffectUniforms) -> Result<(), RenderError> {
        self.ensure_live()?;
        self.queue
            .write_buffer(&self.quad.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
        Ok(())
    }

    fn draw(&mut self) -> Result<(), RenderError> {
        self.ensure_live()?;
        let (w, h) = self.pixel_size();
        self.resize_if_needed(w, h);

        let frame = self.acquire_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("chroma_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.quad.pipeline);
            rpass.set_bind_group(0, &self.quad.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad.vertex_buffer.slice(..));
            rpass.draw(0..6, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Compile the effect shader and build its pipeline.
///
/// Shader diagnostics surface as `Compile`; validation failures while
/// assembling the pipeline surface as `Link`.
async fn build_program(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
) -> Result<QuadResources, RenderError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("chroma_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::CHROMA_WGSL.into()),
    });
    let info = shader.get_compilation_info().await;
    let diagnostics: Vec<String> = info
        .messages
        .iter()
        .filter(|m| matches!(m.message_type, wgpu::CompilationMessageType::Error))
        .map(|m| m.message.clone())
        .collect();
    if !diagnostics.is_empty() {
        _ = device.pop_error_scope().await;
        return Err(RenderError::Compile(diagnostics.join("\n")));
    }

    let quad = create_quad_resources(device, &shader, format);
    if let Some(err) = device.pop_error_scope().await {
        return Err(RenderError::Link(err.to_string()));
    }
    Ok(quad)
}
