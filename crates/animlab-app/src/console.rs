//! Headless console surface: every input line taps the element with that
//! test tag or label, then frames run until idle and the scene is printed.

use std::io::{BufRead, Write};

use animlab_app_shell::{AppShell, Screen};
use animlab_render_common::{HeadlessRenderer, Scene};

use crate::{AppError, AppSettings};

fn print_scene<A>(output: &mut impl Write, scene: &Scene<A>) -> Result<(), AppError> {
    output.write_all(scene.describe().as_bytes())?;
    writeln!(output)?;
    output.flush()?;
    Ok(())
}

pub fn run_console<S, E>(
    shell: &mut AppShell<S, HeadlessRenderer<S::Action>>,
    settings: &AppSettings<E>,
    input: impl BufRead,
    output: &mut impl Write,
) -> Result<(), AppError>
where
    S: Screen,
{
    let interval = settings.frame_interval_nanos();
    writeln!(output, "=== {} | {} ===", settings.title, shell.screen().title())?;
    shell.run_until_idle(interval)?;
    print_scene(output, shell.scene())?;

    for line in input.lines() {
        let line = line?;
        let label = line.trim();
        if label.is_empty() {
            continue;
        }
        writeln!(output, "> {label}")?;
        if !(shell.click_tag(label) || shell.click_text(label)) {
            writeln!(output, "no clickable element labelled '{label}'")?;
            continue;
        }
        let frames = shell.run_until_idle(interval)?;
        log::debug!("'{label}' settled after {frames} frames");
        print_scene(output, shell.scene())?;
    }
    Ok(())
}
