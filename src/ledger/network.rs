/// Which ledger network a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LedgerId {
    Mainnet,
    #[default]
    Testnet,
    Previewnet,
}

impl LedgerId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Previewnet => "previewnet",
        }
    }

    /// Base URL of the public mirror node for this network.
    pub fn mirror_node_url(&self) -> String {
        format!("https://{}.mirrornode.hedera.com", self.as_str())
    }
}

impl std::fmt::Display for LedgerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LedgerId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            "previewnet" => Ok(Self::Previewnet),
            _ => Err(format!(
                "invalid network '{}', expected 'mainnet', 'testnet' or 'previewnet'",
                s
            )),
        }
    }
}
