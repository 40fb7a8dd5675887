use kanshu::gui::KanshuApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Kanshu"),
        ..Default::default()
    };

    eframe::run_native("Kanshu", options, Box::new(|cc| Ok(Box::new(KanshuApp::new(cc)))))
}
