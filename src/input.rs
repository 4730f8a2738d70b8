//! Platform-neutral keyboard input.
//!
//! The window layer translates its own key codes into [`Key`]; the engine only
//! ever sees the resulting [`Command`].

use crate::engine::{CullMode, RenderMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    C,
    D,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    SetCullMode(CullMode),
    SetRenderMode(RenderMode),
}

impl Command {
    /// Maps a key press to the command it triggers.
    pub fn from_key(key: Key) -> Self {
        match key {
            Key::Escape => Command::Quit,
            Key::C => Command::SetCullMode(CullMode::Backface),
            Key::D => Command::SetCullMode(CullMode::None),
            Key::Num1 => Command::SetRenderMode(RenderMode::WireframeVertices),
            Key::Num2 => Command::SetRenderMode(RenderMode::Wireframe),
            Key::Num3 => Command::SetRenderMode(RenderMode::Filled),
            Key::Num4 => Command::SetRenderMode(RenderMode::FilledWireframe),
            Key::Num5 => Command::SetRenderMode(RenderMode::FlatShaded),
            Key::Num6 => Command::SetRenderMode(RenderMode::FlatShadedWireframe),
        }
    }
}

impl From<Key> for Command {
    fn from(key: Key) -> Self {
        Command::from_key(key)
    }
}
