use crate::{Ball, Paddle, Rect};

/// Where the frame rate readout is drawn
pub const FPS_TEXT_POS: (i32, i32) = (10, 10);

/// Something that can show a frame. Coordinates are logical arena pixels.
pub trait DisplaySurface {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Start a new frame on an empty background
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Rect);

    fn draw_text(&mut self, x: i32, y: i32, text: &str);

    /// Show everything drawn since the last `clear`
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// Issue the draw calls for one frame and present it
pub fn render_frame<S: DisplaySurface>(
    surface: &mut S,
    left: &Paddle,
    right: &Paddle,
    ball: &Ball,
    fps: u32,
) -> Result<(), S::Error> {
    surface.clear();
    surface.fill_rect(left.rect());
    surface.fill_rect(right.rect());
    surface.fill_rect(ball.rect());
    surface.draw_text(FPS_TEXT_POS.0, FPS_TEXT_POS.1, &fps_text(fps));
    surface.present()
}

pub fn fps_text(fps: u32) -> String {
    format!("FPS: {fps}")
}
