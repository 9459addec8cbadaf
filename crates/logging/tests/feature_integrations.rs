//! Optional integrations: serde for configuration and the tracing bridge.

#[cfg(feature = "serde")]
mod serde_support {
    use logging::{DebugFlag, VerbosityConfig};

    #[test]
    fn config_round_trips_through_json() {
        let config = VerbosityConfig::from_verbose_level(3);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"debug":{"filter":2,"proto":1}}"#);

        let back: VerbosityConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn flags_serialize_by_variant_name() {
        assert_eq!(serde_json::to_string(&DebugFlag::Filter).unwrap(), r#""Filter""#);
    }
}

#[cfg(feature = "tracing")]
mod tracing_support {
    use logging::{VerbosityConfig, filter_directives};

    #[test]
    fn directives_follow_verbosity() {
        assert_eq!(filter_directives(&VerbosityConfig::from_verbose_level(1)), "warn");
        assert_eq!(
            filter_directives(&VerbosityConfig::from_verbose_level(2)),
            "warn,rsync::filter=debug"
        );
        assert_eq!(
            filter_directives(&VerbosityConfig::from_verbose_level(3)),
            "warn,rsync::filter=trace,rsync::protocol=debug"
        );
    }

    #[test]
    fn debug_events_stay_local_with_tracing() {
        logging::init(VerbosityConfig::from_verbose_level(2));
        logging::drain_events();
        logging::emit_debug(logging::DebugFlag::Filter, 1, "local".to_owned());
        assert_eq!(logging::drain_events().len(), 1);
    }
}
