use roisel_core::roi::{ClickPoint, PendingCircle};
use roisel_core::session::{SessionControl, SessionKey};

use crate::app::RoiSelectApp;

const CROSSHAIR_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 0, 255);
/// 0.6 opacity.
const PREVIEW_ALPHA: u8 = 153;

/// Convert screen coordinates to data coordinates, where integer values are pixel centers.
pub fn screen_to_data(pos: egui::Pos2, img_rect: egui::Rect, image_size: egui::Vec2) -> ClickPoint {
    let px = (pos.x - img_rect.left()) / img_rect.width() * image_size.x;
    let py = (pos.y - img_rect.top()) / img_rect.height() * image_size.y;
    ClickPoint::new(px as f64 - 0.5, py as f64 - 0.5)
}

/// Inverse of [`screen_to_data`].
pub fn data_to_screen(point: ClickPoint, img_rect: egui::Rect, image_size: egui::Vec2) -> egui::Pos2 {
    egui::pos2(
        (point.x as f32 + 0.5) / image_size.x * img_rect.width() + img_rect.left(),
        (point.y as f32 + 0.5) / image_size.y * img_rect.height() + img_rect.top(),
    )
}

/// Route this frame's raw input events to the capture session, in arrival order.
///
/// Presses count only inside the viewport panel; a release always closes a
/// press the session has seen, wherever the pointer is.
pub fn handle_capture_input(
    ctx: &egui::Context,
    app: &mut RoiSelectApp,
    panel_rect: egui::Rect,
    img_rect: egui::Rect,
    image_size: egui::Vec2,
) {
    let events = ctx.input(|i| i.events.clone());

    for event in events {
        match event {
            egui::Event::PointerButton {
                pos, pressed: true, ..
            } if panel_rect.contains(pos) => {
                app.capture_ui.buttons_down += 1;
                app.session
                    .on_press(screen_to_data(pos, img_rect, image_size));
            }
            egui::Event::PointerButton {
                pos,
                pressed: false,
                ..
            } if app.capture_ui.button_held() => {
                app.capture_ui.buttons_down -= 1;
                app.session
                    .on_release(screen_to_data(pos, img_rect, image_size));
            }
            egui::Event::PointerMoved(pos) => {
                let point = screen_to_data(pos, img_rect, image_size);
                app.capture_ui.hover = panel_rect.contains(pos).then_some(point);
                app.session.on_motion(point, app.capture_ui.button_held());
            }
            egui::Event::PointerGone => {
                app.capture_ui.hover = None;
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => {
                let key = if key == egui::Key::Enter {
                    SessionKey::Enter
                } else {
                    SessionKey::Other
                };
                if app.session.on_key(key) == SessionControl::Close {
                    app.finish();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }
            _ => {}
        }
    }
}

/// Draw the live circle preview and the vertical cursor line.
pub fn draw_overlay(
    ctx: &egui::Context,
    ui: &egui::Ui,
    app: &RoiSelectApp,
    img_rect: egui::Rect,
    image_size: egui::Vec2,
) {
    if let Some(circle) = app.session.preview() {
        draw_preview(ui, &circle, img_rect, image_size);
    }
    draw_crosshair(ctx, ui, img_rect);
}

fn draw_preview(ui: &egui::Ui, circle: &PendingCircle, img_rect: egui::Rect, image_size: egui::Vec2) {
    let center = data_to_screen(circle.center, img_rect, image_size);
    let radius = circle.radius as f32 * img_rect.width() / image_size.x;
    let fill = egui::Color32::from_rgba_unmultiplied(31, 119, 180, PREVIEW_ALPHA);
    let edge = egui::Color32::from_rgba_unmultiplied(0, 0, 255, PREVIEW_ALPHA);
    ui.painter()
        .circle(center, radius, fill, egui::Stroke::new(1.0, edge));
}

fn draw_crosshair(ctx: &egui::Context, ui: &egui::Ui, img_rect: egui::Rect) {
    let Some(hover) = ui.input(|i| i.pointer.hover_pos()) else {
        return;
    };
    if !img_rect.contains(hover) {
        return;
    }
    ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
    ui.painter().line_segment(
        [
            egui::pos2(hover.x, img_rect.top()),
            egui::pos2(hover.x, img_rect.bottom()),
        ],
        egui::Stroke::new(1.0, CROSSHAIR_COLOR),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use ndarray::Array2;
    use roisel_core::frame::Frame;
    use roisel_core::roi::CaptureSamples;

    use super::*;

    fn img_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(100.0, 50.0), egui::vec2(200.0, 100.0))
    }

    #[test]
    fn test_top_left_corner_is_minus_half() {
        let p = screen_to_data(egui::pos2(100.0, 50.0), img_rect(), egui::vec2(20.0, 10.0));
        assert_eq!(p, ClickPoint::new(-0.5, -0.5));
    }

    #[test]
    fn test_pixel_center_is_integer() {
        // 10 screen points per pixel: the center of pixel (3, 2) is at (135, 75).
        let p = screen_to_data(egui::pos2(135.0, 75.0), img_rect(), egui::vec2(20.0, 10.0));
        assert!((p.x - 3.0).abs() < 1e-4);
        assert!((p.y - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_outside_image_not_clamped() {
        let p = screen_to_data(egui::pos2(40.0, 200.0), img_rect(), egui::vec2(20.0, 10.0));
        assert!(p.x < 0.0);
        assert!(p.y > 10.0);
    }

    #[test]
    fn test_data_to_screen_inverts() {
        let rect = img_rect();
        let size = egui::vec2(20.0, 10.0);
        let screen = egui::pos2(187.0, 133.0);
        let back = data_to_screen(screen_to_data(screen, rect, size), rect, size);
        assert!((back.x - screen.x).abs() < 1e-3);
        assert!((back.y - screen.y).abs() < 1e-3);
    }

    fn panel_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(400.0, 200.0))
    }

    fn button(x: f32, y: f32, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos: egui::pos2(x, y),
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn new_app(ctx: &egui::Context) -> (RoiSelectApp, mpsc::Receiver<CaptureSamples>) {
        let frame = Frame::new(Array2::from_elem((10, 20), 0.5));
        let (tx, rx) = mpsc::channel();
        (RoiSelectApp::new(ctx, &frame, 3, tx), rx)
    }

    fn feed(ctx: &egui::Context, app: &mut RoiSelectApp, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            handle_capture_input(ctx, app, panel_rect(), img_rect(), egui::vec2(20.0, 10.0));
        });
    }

    #[test]
    fn test_press_outside_panel_is_ignored() {
        let ctx = egui::Context::default();
        let (mut app, _rx) = new_app(&ctx);

        feed(&ctx, &mut app, vec![button(450.0, 75.0, true), button(450.0, 75.0, false)]);

        assert!(app.session.samples().xs.is_empty());
        assert!(app.session.samples().ys.is_empty());
        assert!(!app.capture_ui.button_held());
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let ctx = egui::Context::default();
        let (mut app, _rx) = new_app(&ctx);

        feed(&ctx, &mut app, vec![button(135.0, 75.0, false)]);

        assert!(app.session.samples().xs.is_empty());
        assert_eq!(app.capture_ui.buttons_down, 0);
    }

    #[test]
    fn test_release_outside_panel_closes_press() {
        let ctx = egui::Context::default();
        let (mut app, _rx) = new_app(&ctx);

        feed(&ctx, &mut app, vec![button(135.0, 75.0, true)]);
        assert!(app.capture_ui.button_held());

        feed(&ctx, &mut app, vec![button(455.0, 75.0, false)]);

        let samples = app.session.samples();
        assert_eq!(samples.xs.len(), 2);
        assert_eq!(samples.ys.len(), 1);
        assert!((samples.xs[0] - 3.0).abs() < 1e-4);
        assert!((samples.xs[1] - 35.0).abs() < 1e-4);
        assert!(!app.capture_ui.button_held());
    }

    #[test]
    fn test_drag_sets_preview_until_release() {
        let ctx = egui::Context::default();
        let (mut app, _rx) = new_app(&ctx);

        feed(
            &ctx,
            &mut app,
            vec![
                button(135.0, 75.0, true),
                egui::Event::PointerMoved(egui::pos2(165.0, 75.0)),
            ],
        );
        let preview = app.session.preview().unwrap();
        assert!((preview.radius - 3.0).abs() < 1e-4);

        feed(&ctx, &mut app, vec![button(165.0, 75.0, false)]);
        assert!(app.session.preview().is_none());
    }

    #[test]
    fn test_enter_hands_samples_back() {
        let ctx = egui::Context::default();
        let (mut app, rx) = new_app(&ctx);

        feed(
            &ctx,
            &mut app,
            vec![
                button(135.0, 75.0, true),
                button(155.0, 75.0, false),
                egui::Event::Key {
                    key: egui::Key::Enter,
                    physical_key: None,
                    pressed: true,
                    repeat: false,
                    modifiers: egui::Modifiers::NONE,
                },
            ],
        );

        assert!(app.session.is_finished());
        let samples = rx.try_recv().unwrap();
        assert_eq!(samples.xs.len(), 2);
        assert_eq!(samples.ys.len(), 1);
    }
}
