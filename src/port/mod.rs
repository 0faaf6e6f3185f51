//! Ports - interfaces between the derivation core and the outside world

pub mod render;
pub mod source;

pub use render::Renderer;
pub use source::EventSource;
