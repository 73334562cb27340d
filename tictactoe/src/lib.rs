pub use board::*;
pub use errors::*;
pub use mark::*;
pub use rules::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod mark;
mod rules;
mod visualization;
