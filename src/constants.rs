//! Constants used throughout the acfgen application

/// Default settings file location, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config/config.yml";

/// Directory for generated field group classes, relative to the theme root
pub const GROUPS_DIR: &str = "app/ACFGroups";

/// Suffix appended to the PascalCased group slug to form the class name
pub const CLASS_SUFFIX: &str = "ACFGroup";

/// Extension of generated artifacts
pub const ARTIFACT_EXT: &str = "php";

/// Stub placeholder tokens
pub mod tokens {
    /// Replaced with the derived class name
    pub const CLASS_NAME: &str = "DummyACFGroup";
    /// Replaced with the raw group slug
    pub const GROUP_SLUG: &str = "dummy_slug";
    /// Replaced with the location context
    pub const LOCATION_WHEN: &str = "dummy_location_when";
    /// Replaced with the location operator
    pub const LOCATION_EQUAL: &str = "dummy_location_equal";
    /// Replaced with the location value
    pub const LOCATION_VALUE: &str = "dummy_location_value";
    /// Replaced with the concatenated per-field builder calls
    pub const FIELDS_BLOCK: &str = "addDummyFields";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
