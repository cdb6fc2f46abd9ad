pub mod heroes;

#[cfg(test)]
mod laws;
#[cfg(test)]
mod scenarios;
