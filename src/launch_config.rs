use std::env;

use url::Url;

use crate::{DESKTOP_ENV, DEVELOPMENT_MODE_VALUE, DEV_SERVER_URL_ENV, PACKAGED_ENTRY_DOCUMENT};

/// What the main window loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EntryPoint {
    DevServer(Url),
    Packaged(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LaunchConfig {
    pub(crate) dev_mode: bool,
    pub(crate) entry_point: EntryPoint,
}

impl LaunchConfig {
    pub(crate) fn from_env<F>(log: F) -> Self
    where
        F: Fn(&str),
    {
        Self::from_values(
            env::var(DESKTOP_ENV).ok().as_deref(),
            env::var(DEV_SERVER_URL_ENV).ok().as_deref(),
            log,
        )
    }

    fn from_values<F>(desktop_env: Option<&str>, dev_server_url: Option<&str>, log: F) -> Self
    where
        F: Fn(&str),
    {
        let dev_mode = desktop_env
            .map(str::trim)
            .is_some_and(|value| value == DEVELOPMENT_MODE_VALUE);

        let entry_point = match dev_server_url.map(str::trim) {
            None | Some("") => EntryPoint::Packaged(PACKAGED_ENTRY_DOCUMENT),
            Some(raw) => match parse_dev_server_url(raw) {
                Ok(url) => EntryPoint::DevServer(url),
                Err(error) => {
                    log(&format!(
                        "ignoring {DEV_SERVER_URL_ENV}: {error}; loading packaged document"
                    ));
                    EntryPoint::Packaged(PACKAGED_ENTRY_DOCUMENT)
                }
            },
        };

        Self {
            dev_mode,
            entry_point,
        }
    }
}

fn parse_dev_server_url(raw: &str) -> Result<Url, String> {
    let parsed = Url::parse(raw).map_err(|error| format!("Invalid URL: {error}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(format!(
            "Unsupported URL scheme '{scheme}', only http/https are allowed."
        )),
    }
}
