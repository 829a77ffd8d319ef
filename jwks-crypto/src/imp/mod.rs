pub mod hasher;
pub mod utilities;

#[cfg(test)]
mod test;
