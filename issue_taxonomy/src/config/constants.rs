pub mod compile_time {
    pub mod resources {
        /// Default taxonomy document file name
        pub const TAXONOMY_FILE_NAME: &str = "issues.yaml";

        /// Default HTTP status mapping table file name
        pub const HTTP_TABLE_FILE_NAME: &str = "http_code_mappings.toml";

        /// Default exception mapping table file name
        pub const EXCEPTION_TABLE_FILE_NAME: &str = "exception_mappings.toml";

        /// Maximum size of a single artifact (1MB)
        /// SECURITY: artifacts are read fully into memory
        pub const MAX_ARTIFACT_SIZE: u64 = 1024 * 1024;

        /// Maximum number of entries in one mapping table or taxonomy
        pub const MAX_TABLE_ENTRIES: usize = 10_000;
    }

    pub mod logging {
        /// Maximum events held by a `MemoryLogger`
        pub const EVENT_BUFFER_SIZE: usize = 1000;

        /// Log messages longer than this are truncated
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 4096;
    }
}

/// Artifacts compiled into the library
pub mod bundled {
    pub const TAXONOMY: &str = include_str!("../../resources/issues.yaml");
    pub const HTTP_TABLE: &str = include_str!("../../resources/http_code_mappings.toml");
    pub const EXCEPTION_TABLE: &str = include_str!("../../resources/exception_mappings.toml");
}
