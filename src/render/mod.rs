pub mod renderer;
pub mod terminal;

pub use renderer::Renderer;
pub use terminal::TerminalSession;
