pub mod activation;
pub mod commands;
pub mod completions;
pub mod config;
pub mod format;
pub mod models;
pub mod reference;
pub mod render;
pub mod source;
pub mod validation;

/// ASCII art logo for the hitos CLI
pub const LOGO: &str = "\
   ╷      ╷
   ├─┐ ╷ ─┼─ ┌─┐ ┌─╴
   │ │ │  │  │ │ └─┐
   ┴ ┴ ┴  ┴  └─┘ ╶─┘";
