use std::path::Path;

use console::Style;
use roisel_core::io::bruker::{DatasetInfo, Endianness};
use roisel_core::roi::Roi;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
    warn: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
            warn: Style::new().yellow(),
        }
    }
}

pub fn print_dataset_summary(info: &DatasetInfo) {
    let s = Styles::new();
    let (rows, cols) = info.plane_shape();

    println!();
    println!("  {}", s.title.apply_to("Dataset"));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("File"),
        s.path.apply_to(info.path.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Core size"),
        s.value.apply_to(format!("{:?}", info.core_size))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Frame shown"),
        s.value.apply_to(format!("{rows} rows x {cols} cols"))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Frames"),
        s.value.apply_to(info.frame_count)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Word type"),
        s.value.apply_to(info.word_type)
    );
    let order = match info.endianness {
        Endianness::Little => "little-endian",
        Endianness::Big => "big-endian",
    };
    println!("  {:<14}{}", s.label.apply_to("Byte order"), s.value.apply_to(order));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Scaling"),
        s.value.apply_to(format!("x{} + {}", info.slope, info.offset))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Parameters"),
        s.value.apply_to(info.source)
    );
    if let Some(ref subject) = info.subject {
        println!("  {:<14}{}", s.label.apply_to("Subject"), s.value.apply_to(subject));
    }
    if let Some(ref study) = info.study {
        println!("  {:<14}{}", s.label.apply_to("Study"), s.value.apply_to(study));
    }
    println!();
}

pub fn print_roi_table(path: &Path, rois: &[Roi]) {
    let s = Styles::new();

    println!();
    println!(
        "  {} {}",
        s.title.apply_to("ROI table"),
        s.path.apply_to(path.display())
    );
    println!();

    if rois.is_empty() {
        println!("  {}", s.warn.apply_to("no circles"));
        println!();
        return;
    }

    println!(
        "  {:<6}{:>10}{:>10}{:>10}",
        s.label.apply_to("#"),
        s.label.apply_to("x"),
        s.label.apply_to("y"),
        s.label.apply_to("radius")
    );
    for (i, roi) in rois.iter().enumerate() {
        let radius = if roi.radius < 0 {
            s.warn.apply_to(roi.radius)
        } else {
            s.value.apply_to(roi.radius)
        };
        println!(
            "  {:<6}{:>10}{:>10}{:>10}",
            i + 1,
            s.value.apply_to(roi.center_x),
            s.value.apply_to(roi.center_y),
            radius
        );
    }
    println!();
}
