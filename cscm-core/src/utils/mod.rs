pub mod diagnostic;
pub mod src_span;
pub mod error;
pub mod emitter;

pub mod prelude {
    pub use super::{
        diagnostic::*,
        src_span::*,
        error::*,
        emitter::*
    };
}

#[cfg(test)]
mod tests;
