use derive_builder::Builder;

/// Sender configuration.
#[derive(Debug, Clone, Builder)]
pub struct SenderConfig {
    /// Whether to reject a query equal to the identity element.
    #[builder(setter(custom), default = "true")]
    identity_check: bool,
}

impl SenderConfigBuilder {
    /// Accepts any query, including the identity element.
    pub fn skip_identity_check(&mut self) -> &mut Self {
        self.identity_check = Some(false);
        self
    }
}

impl SenderConfig {
    /// Creates a new builder for SenderConfig.
    pub fn builder() -> SenderConfigBuilder {
        SenderConfigBuilder::default()
    }

    /// Whether to reject a query equal to the identity element.
    pub fn identity_check(&self) -> bool {
        self.identity_check
    }
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            identity_check: true,
        }
    }
}

/// Receiver configuration.
#[derive(Debug, Clone, Builder)]
pub struct ReceiverConfig {
    /// Whether to reject a sender public key equal to the identity element.
    #[builder(setter(custom), default = "true")]
    identity_check: bool,
}

impl ReceiverConfigBuilder {
    /// Accepts any sender public key, including the identity element.
    pub fn skip_identity_check(&mut self) -> &mut Self {
        self.identity_check = Some(false);
        self
    }
}

impl ReceiverConfig {
    /// Creates a new builder for ReceiverConfig.
    pub fn builder() -> ReceiverConfigBuilder {
        ReceiverConfigBuilder::default()
    }

    /// Whether to reject a sender public key equal to the identity element.
    pub fn identity_check(&self) -> bool {
        self.identity_check
    }
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            identity_check: true,
        }
    }
}
