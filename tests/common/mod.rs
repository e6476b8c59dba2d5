/*!
 * Common test utilities for the ytswai test suite
 */

use ytswai::app_config::Config;


/// Build a configuration suitable for mock-backed tests
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.transcript.api_key = "test-key".to_string();
    config
}
