pub mod festival;
pub mod reflections;

#[cfg(test)]
mod tests;
