use animlab_ui::LayoutError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("layout failed: {0}")]
    Layout(#[from] LayoutError),
    #[error("render failed: {0}")]
    Render(#[source] Box<dyn std::error::Error + 'static>),
}
