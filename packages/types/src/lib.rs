mod color;
mod http;
mod words;
pub use color::*;
pub use http::*;
pub use words::*;

#[cfg(test)]
mod tests;
