extern crate sdl2;

use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color as SdlColor;
use sdl2::rect::Rect;
use sdl2::render::BlendMode;

use crate::background::BallsBackground;
use crate::ball::Ball;
use crate::config::DisplayConfig;
use crate::error::{Error, Result};

const BACKGROUND: SdlColor = SdlColor::RGB(12, 10, 24);
const SEPARATOR: SdlColor = SdlColor::RGB(40, 36, 64);

pub struct Graphics {
    pub sdl_context: sdl2::Sdl,
    pub canvas: sdl2::render::Canvas<sdl2::video::Window>,
    blur_layers: u32,
}

/// Vertical offset of each container in the window, with the window size.
pub fn stacked_layout(instances: &[BallsBackground]) -> (Vec<i32>, u32, u32) {
    let mut offsets = Vec::with_capacity(instances.len());
    let mut height = 0.;
    let mut width: f64 = 1.;
    for instance in instances {
        offsets.push(height as i32);
        if let Some(bounds) = instance.bounds() {
            height += bounds.height;
            width = width.max(bounds.width);
        }
    }
    (offsets, width.ceil() as u32, (height.ceil() as u32).max(1))
}

pub fn init_graphics(display_config: &DisplayConfig, instances: &[BallsBackground]) -> Result<Graphics> {
    let (_, width, height) = stacked_layout(instances);
    let sdl_context = sdl2::init().map_err(Error::Render)?;
    let video_subsystem = sdl_context.video().map_err(Error::Render)?;

    let window = video_subsystem
        .window(&display_config.title, width, height)
        .position_centered()
        .build()
        .map_err(|e| Error::Render(e.to_string()))?;
    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| Error::Render(e.to_string()))?;
    canvas.set_blend_mode(BlendMode::Blend);

    Ok(Graphics {
        sdl_context,
        canvas,
        blur_layers: display_config.blur_layers.max(1),
    })
}

pub fn render_backgrounds(graphics: &mut Graphics, instances: &[BallsBackground]) -> Result<()> {
    let (offsets, width, _) = stacked_layout(instances);
    graphics.canvas.set_clip_rect(None::<Rect>);
    graphics.canvas.set_draw_color(BACKGROUND);
    graphics.canvas.clear();

    for (instance, offset) in instances.iter().zip(offsets) {
        let bounds = match instance.bounds() {
            Some(bounds) => bounds,
            None => continue,
        };
        // Containers hide whatever overflows them.
        graphics.canvas.set_clip_rect(Rect::new(
            0,
            offset,
            bounds.width.ceil() as u32,
            bounds.height.ceil() as u32,
        ));
        for ball in instance.balls() {
            draw_ball(graphics, ball, offset)?;
        }
        graphics.canvas.set_clip_rect(None::<Rect>);
        graphics.canvas.set_draw_color(SEPARATOR);
        graphics
            .canvas
            .fill_rect(Rect::new(0, offset + bounds.height as i32 - 1, width, 1))
            .map_err(Error::Render)?;
    }
    graphics.canvas.present();
    Ok(())
}

// Concentric translucent rings fading out over the blur radius.
fn draw_ball(graphics: &mut Graphics, ball: &Ball, offset: i32) -> Result<()> {
    let center = ball.center();
    let x = (0.5 + center.x) as i16;
    let y = (0.5 + center.y) as i16 + offset as i16;
    let style = ball.style();
    let layers = graphics.blur_layers;
    let alpha = (style.color.a * 255. / (layers + 1) as f32).max(1.) as u8;
    let color = SdlColor::RGBA(style.color.r, style.color.g, style.color.b, alpha);

    for layer in 0..=layers {
        let spread = style.blur * (layers - layer) as f64 / layers as f64;
        let radius = (ball.radius() + spread) as i16;
        graphics
            .canvas
            .filled_circle(x, y, radius, color)
            .map_err(Error::Render)?;
    }
    Ok(())
}
