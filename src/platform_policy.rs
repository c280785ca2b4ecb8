/// Platform conventions resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PlatformPolicy {
    /// Keep the process alive after its last window closed (macOS apps stay in the dock).
    pub(crate) stay_resident_on_all_closed: bool,
}

impl PlatformPolicy {
    pub(crate) fn for_current_platform() -> Self {
        Self::for_os(std::env::consts::OS)
    }

    pub(crate) fn for_os(os: &str) -> Self {
        Self {
            stay_resident_on_all_closed: os == "macos",
        }
    }
}
