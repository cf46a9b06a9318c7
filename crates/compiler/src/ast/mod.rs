pub use css::*;
pub use expr::*;

mod css;
mod expr;
