//! Tests for verbosity mapping and subscriber installation

#[cfg(test)]
mod tests {
    use brickwall::io::logging::{init, level_for};
    use tracing::Level;

    // Tests each -v raises the detail by one level
    // Verified by starting the scale at INFO
    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0, false), Level::WARN);
        assert_eq!(level_for(1, false), Level::INFO);
        assert_eq!(level_for(2, false), Level::DEBUG);
        assert_eq!(level_for(3, false), Level::TRACE);
        assert_eq!(level_for(9, false), Level::TRACE);
    }

    // Tests quiet overrides verbosity
    // Verified by letting verbose win over quiet
    #[test]
    fn test_level_for_quiet() {
        assert_eq!(level_for(0, true), Level::WARN);
        assert_eq!(level_for(3, true), Level::WARN);
    }

    // Tests only one global subscriber is installed
    // Verified by panicking on repeated initialisation
    #[test]
    fn test_init_twice() {
        // Another test may have installed the subscriber already
        let _ = init(Level::DEBUG);
        assert!(!init(Level::DEBUG));
        tracing::debug!("logging initialised");
    }
}
