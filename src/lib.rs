pub mod format;
pub mod model;
pub mod style;
pub mod timeline;

#[cfg(test)]
mod test;
