// Adapters layer: concrete implementations of the domain ports for the real terminal.

#[cfg(feature = "cli")]
pub mod keyboard;
pub mod system;
#[cfg(feature = "cli")]
pub mod terminal;

#[cfg(feature = "cli")]
pub use keyboard::KeyPressSignal;
pub use system::{SystemClock, ThreadRngSource};
#[cfg(feature = "cli")]
pub use terminal::TerminalDisplay;
