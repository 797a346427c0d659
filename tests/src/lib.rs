#[cfg(test)]
pub mod suite;

#[cfg(test)]
mod claim_flow;
