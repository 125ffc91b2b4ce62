//! Networks Value Object

/// Chains a presale is offered on when the request names none
pub const DEFAULT_NETWORKS: [&str; 2] = ["ETH", "BSC"];

/// Ordered list of network tickers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Networks(Vec<String>);

impl Networks {
    pub fn new(networks: Vec<String>) -> Self {
        Self(networks)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Default for Networks {
    fn default() -> Self {
        Self(DEFAULT_NETWORKS.iter().map(|n| n.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_networks() {
        assert_eq!(Networks::default().as_slice(), ["ETH", "BSC"]);
    }

    #[test]
    fn test_explicit_empty_list_is_kept() {
        assert!(Networks::new(Vec::new()).as_slice().is_empty());
    }
}
