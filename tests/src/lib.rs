#[cfg(test)]
mod resolution;
#[cfg(test)]
mod utils;
