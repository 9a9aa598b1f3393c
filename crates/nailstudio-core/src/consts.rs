/// Split position a freshly mounted comparison slider starts at (percent).
pub const DEFAULT_SPLIT_PERCENT: f32 = 50.0;

/// Upper bound of the split position (percent).
pub const MAX_SPLIT_PERCENT: f32 = 100.0;

/// Label drawn over the revealed part of the original photo.
pub const BEFORE_LABEL: &str = "ORIGINAL";

/// Label drawn over the generated layer.
pub const AFTER_LABEL: &str = "AI GENERATED";

/// Image-editing model used when the config does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// Base URL of the Generative Language REST API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables searched for an API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["NAILSTUDIO_API_KEY", "GEMINI_API_KEY"];

/// Generation requests routinely take tens of seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Photo offered by "Try Sample Photo".
pub const SAMPLE_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1516975080664-ed2fc6a32937?q=80&w=2070&auto=format&fit=crop";

/// Prefix of exported file names; the unix timestamp in milliseconds follows.
pub const DEFAULT_EXPORT_PREFIX: &str = "nailstudio-nails";
