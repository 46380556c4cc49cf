//! The binary's launcher on scripted console input.

use animation_demo::{create_app, DemoExample};
use animlab_app::Example;

fn run(example: DemoExample, input: &str) -> String {
    let mut output = Vec::new();
    create_app()
        .with_example(example)
        .run_with(input.as_bytes(), &mut output)
        .expect("console run");
    String::from_utf8(output).expect("utf8 output")
}

#[test]
fn default_launch_runs_the_combined_example() {
    let app = create_app();
    assert_eq!(app.settings().title, "Lab13");
    assert_eq!(app.settings().example, DemoExample::Combined);

    let output = run(DemoExample::default(), "");
    assert!(output.starts_with("=== Lab13 | Combined ==="), "{output}");
    assert!(output.contains("text \"Modo Claro\""), "{output}");
}

#[test]
fn typed_labels_and_tags_tap_elements() {
    let output = run(DemoExample::Combined, "Cambiar modo\ncombined-box\nnada\n");
    assert!(output.contains("> Cambiar modo"));
    assert!(output.contains("text \"Modo Oscuro\""), "{output}");
    assert!(output.contains("> combined-box"));
    assert!(output.contains("no clickable element labelled 'nada'"));
}

#[test]
fn every_example_launches() {
    for example in DemoExample::ALL {
        let output = run(example, "");
        assert!(output.contains(example.name()), "{output}");
    }
}
