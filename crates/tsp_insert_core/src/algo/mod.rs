pub(crate) mod assemble;
pub(crate) mod insertion;
pub(crate) mod seed;
pub(crate) mod solver;

#[cfg(test)]
mod tests_proptest;
