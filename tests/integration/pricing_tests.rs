//! Pricing resolver integration tests
//!
//! Exercises the resolver through the public API, over both the published
//! table and tables loaded from YAML.

#[cfg(test)]
mod tests {
    use mindcare_corporate::config::PricingConfig;
    use mindcare_corporate::{Config, PricingResolver, PricingTier, TierTable};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    // ==================== Published table ====================

    #[test]
    fn test_reference_examples() {
        let resolver = PricingResolver::default();

        let cases = [
            (50, "STARTER", dec!(750), dec!(7200)),
            (200, "BUSINESS", dec!(2400), dec!(23040)),
            (1000, "ENTERPRISE", dec!(8000), dec!(76800)),
        ];
        for (employees, plan, monthly, annual) in cases {
            let resolution = resolver.resolve(employees).expect("positive count");
            assert_eq!(resolution.tier.name, plan);
            assert_eq!(resolution.quote.monthly_price, monthly);
            assert_eq!(resolution.quote.annual_price, annual);
        }
    }

    #[test]
    fn test_every_count_selects_exactly_one_tier() {
        let resolver = PricingResolver::default();

        for employees in 1..=500_i64 {
            let resolution = resolver.resolve(employees).expect("positive count");
            let expected = match employees {
                1..=50 => "starter",
                51..=200 => "business",
                _ => "enterprise",
            };
            assert_eq!(resolution.tier.key, expected, "employees = {}", employees);
        }
    }

    #[test]
    fn test_annual_price_is_discounted_monthly() {
        let resolver = PricingResolver::default();

        for employees in [1_i64, 7, 49, 50, 51, 137, 200, 201, 999, 25_000] {
            let quote = resolver.resolve(employees).expect("positive count").quote;
            assert_eq!(
                quote.annual_price,
                quote.monthly_price * Decimal::from(12) * dec!(0.8)
            );
            assert_eq!(
                quote.monthly_price,
                quote.price_per_employee * Decimal::from(employees)
            );
        }
    }

    #[test]
    fn test_form_input_is_parsed_strictly() {
        let resolver = PricingResolver::default();

        assert_eq!(
            resolver.resolve_input(" 120 ").map(|r| r.tier.name.clone()),
            Some("BUSINESS".to_string())
        );
        for input in ["", "   ", "0", "-3", "12abc", "1.5", "abc"] {
            assert!(resolver.resolve_input(input).is_none(), "{:?}", input);
        }
    }

    #[test]
    fn test_chosen_plan_is_priced_independently_of_recommendation() {
        let resolver = PricingResolver::default();

        let quote = resolver.quote_plan("STARTER", 300).expect("known plan");
        assert_eq!(quote.plan, "STARTER");
        assert_eq!(quote.monthly_price, dec!(4500));
        assert!(resolver.quote_plan("platinum", 10).is_none());
    }

    // ==================== Configured tables ====================

    #[test]
    fn test_custom_table_from_yaml() {
        let config = Config::from_yaml(
            r#"
pricing:
  currency: USD
  annual_discount_rate: 0.1
  tiers:
    - key: small
      name: SMALL
      max_employees: 10
      price_per_employee: 20
    - key: large
      name: LARGE
      price_per_employee: 9.5
"#,
        )
        .expect("valid config");

        let resolver = PricingResolver::from_config(config.pricing()).expect("resolver");
        assert_eq!(resolver.currency(), "USD");

        let small = resolver.resolve(10).expect("positive count");
        assert_eq!(small.tier.key, "small");
        assert_eq!(small.quote.monthly_price, dec!(200));
        assert_eq!(small.quote.annual_price, dec!(2160));

        let large = resolver.resolve(11).expect("positive count");
        assert_eq!(large.tier.key, "large");
        assert_eq!(large.quote.monthly_price, dec!(104.5));
    }

    #[test]
    fn test_misordered_table_is_rejected() {
        let config = PricingConfig {
            tiers: Some(vec![
                PricingTier::new("big", "BIG", Some(100), dec!(10)),
                PricingTier::new("small", "SMALL", Some(10), dec!(12)),
                PricingTier::new("top", "TOP", None, dec!(8)),
            ]),
            ..PricingConfig::default()
        };

        assert!(PricingResolver::from_config(&config).is_err());
    }

    #[test]
    fn test_table_without_unbounded_tier_is_rejected() {
        let result = TierTable::new(vec![
            PricingTier::new("a", "A", Some(10), dec!(10)),
            PricingTier::new("b", "B", Some(20), dec!(9)),
        ]);
        assert!(result.is_err());
    }
}
