/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use std::str::FromStr;

use log::Level;

/// Environment variable selecting the server log level.
pub const LOG_LEVEL_ENV: &str = "EKKLESIA_LOG_LEVEL";

/// Level the server logs at when nothing is configured.
pub const DEFAULT_SERVER_LEVEL: Level = Level::Warn;

/// Level the browser console logger uses.
pub const DEFAULT_CLIENT_LEVEL: Level = Level::Info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogSettings {
    pub level: Level,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(LOG_LEVEL_ENV).ok().as_deref())
    }

    /// Unset, empty or unrecognised values fall back to the server default.
    pub fn from_value(value: Option<&str>) -> Self {
        let level = value
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .and_then(|value| Level::from_str(value).ok())
            .unwrap_or(DEFAULT_SERVER_LEVEL);
        Self { level }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_SERVER_LEVEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!(LogSettings::from_value(Some("debug")).level, Level::Debug);
        assert_eq!(LogSettings::from_value(Some(" INFO ")).level, Level::Info);
        assert_eq!(LogSettings::from_value(Some("Trace")).level, Level::Trace);
    }

    #[test]
    fn falls_back_to_warn() {
        assert_eq!(LogSettings::from_value(None), LogSettings::default());
        assert_eq!(LogSettings::from_value(Some("")).level, Level::Warn);
        assert_eq!(LogSettings::from_value(Some("verbose")).level, Level::Warn);
    }
}
