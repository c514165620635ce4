pub mod core;

#[cfg(test)]
mod tests;
