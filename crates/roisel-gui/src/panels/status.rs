use crate::app::RoiSelectApp;

pub fn show(ctx: &egui::Context, app: &RoiSelectApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        ui.horizontal(|ui| {
            if let Some(ref size) = app.viewport.image_size {
                ui.label(format!("{}x{}", size[0], size[1]));
                ui.separator();
            }
            ui.label(format!("Zoom: {:.0}%", app.viewport.zoom * 100.0));
            ui.separator();

            match app.capture_ui.hover {
                Some(p) => ui.label(format!("x={:.1} y={:.1}", p.x, p.y)),
                None => ui.label("x=- y=-"),
            };
            ui.separator();

            let captured = app.session.samples().completed_pairs();
            let text = format!("Circles: {captured}/{}", app.roi_count);
            if captured >= app.roi_count {
                ui.colored_label(egui::Color32::from_rgb(80, 180, 80), text);
            } else {
                ui.label(text);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.small("Drag from a center to set the radius, Enter to finish");
            });
        });

        ui.add_space(2.0);
    });
}
