use std::process::ExitCode;

fn main() -> ExitCode {
    println!("=== animlab animation demo ===");
    println!("Type the label of a button (e.g. 'Cambiar modo') and press enter.");
    println!("The box in the combined example is labelled by its tag: 'combined-box'.");
    println!();

    animation_demo::entry_point()
}
