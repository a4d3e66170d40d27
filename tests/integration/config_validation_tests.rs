//! Configuration loading and validation integration tests

#[cfg(test)]
mod tests {
    use mindcare_corporate::config::{
        CheckoutProviderKind, Config, CorsConfig, GatewayConfig, Validate,
    };
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::io::Write;

    fn overrides(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    // ==================== Defaults ====================

    #[test]
    fn test_default_config_is_valid() {
        let config = GatewayConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8001);
        assert_eq!(config.pricing.currency, "BRL");
        assert_eq!(config.pricing.annual_discount_rate, dec!(0.20));
        assert_eq!(config.checkout.provider, CheckoutProviderKind::Hosted);
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = Config::from_yaml("{}").expect("empty document");
        assert_eq!(config.server().host, "0.0.0.0");
        assert!(config.pricing().tiers.is_none());
    }

    // ==================== Files ====================

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(
            file,
            "server:\n  port: 9090\ncheckout:\n  base_url: https://pay.example.com\nlogging:\n  level: debug"
        )
        .expect("write config");

        let config = Config::from_file(file.path()).await.expect("load config");
        assert_eq!(config.server().port, 9090);
        assert_eq!(
            config.checkout().base_url.as_deref(),
            Some("https://pay.example.com")
        );
        assert_eq!(config.logging().level, "debug");
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let result = Config::from_file("/definitely/not/here/corporate.yaml").await;
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_yaml_is_rejected() {
        assert!(Config::from_yaml("server: [unclosed").is_err());
    }

    // ==================== Validation ====================

    #[test]
    fn test_port_zero_fails_validation() {
        let mut config = GatewayConfig::default();
        config.server.port = 0;

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Port"));
    }

    #[test]
    fn test_discount_rate_out_of_range_fails() {
        let mut config = GatewayConfig::default();
        config.pricing.annual_discount_rate = dec!(1);
        assert!(config.validate().is_err());

        config.pricing.annual_discount_rate = dec!(-0.1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_currency_must_be_iso_code() {
        let mut config = GatewayConfig::default();
        config.pricing.currency = "REAIS".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_http_provider_requires_api_settings() {
        let mut config = GatewayConfig::default();
        config.checkout.provider = CheckoutProviderKind::Http;
        assert!(config.validate().is_err());

        config.checkout.api_url = Some("https://payments.example.com/sessions".to_string());
        assert!(config.validate().is_err());

        config.checkout.api_key = Some("sk_test_123".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_wildcard_cors_with_credentials_fails() {
        let cors = CorsConfig {
            allow_credentials: true,
            ..CorsConfig::default()
        };
        assert!(cors.validate().is_err());
    }

    // ==================== Environment overrides ====================

    #[test]
    fn test_env_overrides_apply() {
        let mut config = GatewayConfig::default();
        config
            .apply_overrides(overrides(&[
                ("CORPORATE_PORT", "9100"),
                ("CORPORATE_CURRENCY", "USD"),
                ("CORPORATE_ANNUAL_DISCOUNT_RATE", "0.15"),
                ("CORPORATE_CHECKOUT_PROVIDER", "http"),
                ("CORPORATE_CHECKOUT_API_URL", "https://payments.example.com"),
                ("CORPORATE_CHECKOUT_API_KEY", "sk_live"),
            ]))
            .expect("overrides should parse");

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.pricing.currency, "USD");
        assert_eq!(config.pricing.annual_discount_rate, dec!(0.15));
        assert_eq!(config.checkout.provider, CheckoutProviderKind::Http);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unparsable_env_override_is_error() {
        let mut config = GatewayConfig::default();
        let result = config.apply_overrides(overrides(&[("CORPORATE_PORT", "eighty")]));
        assert!(result.is_err());
    }
}
