use vanshavali_ascii_render::{render_ascii, AsciiRenderOptions, NodeLabel};
use vanshavali_data::bundled_dataset;
use vanshavali_view::{Controller, ControllerOptions};

fn controller() -> Controller {
    Controller::new(bundled_dataset().expect("bundled dataset"), ControllerOptions::default())
        .expect("controller init failed")
}

#[test]
fn renders_focused_lineage() {
    let mut controller = controller();
    let frame = controller.select_node("3").expect("focus failed");
    let output = render_ascii(frame, &AsciiRenderOptions::default());
    for id in ["1", "3", "11", "12", "13", "14"] {
        assert!(output.contains(id), "missing {id} in\n{output}");
    }
    assert!(output.contains('*'));
    assert!(!output.contains("179"));
}

#[test]
fn renders_names_when_asked() {
    let mut controller = controller();
    let frame = controller.select_node("5").expect("focus failed");
    let options = AsciiRenderOptions {
        label: NodeLabel::Name,
        ..AsciiRenderOptions::default()
    };
    let output = render_ascii(frame, &options);
    assert!(output.contains("बुधा"));
    assert!(output.contains("नकटू"));
}

#[test]
fn output_fits_requested_width() {
    let controller = controller();
    let options = AsciiRenderOptions {
        max_width: 60,
        max_height: 20,
        ..AsciiRenderOptions::default()
    };
    let output = render_ascii(controller.frame(), &options);
    assert!(!output.is_empty());
    assert!(output.lines().all(|line| line.chars().count() <= 60 + 16 + 8));
}
