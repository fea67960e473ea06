use std::fmt::Debug;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::pal::MockFilesystem;
use crate::pal::{BuildTargetFilesystem, Filesystem};

/// Enum to hide the different filesystem implementations behind a single
/// wrapper type.
#[derive(Clone)]
pub(crate) enum FilesystemFacade {
    Target(&'static BuildTargetFilesystem),

    #[cfg(test)]
    Mock(Arc<MockFilesystem>),
}

impl FilesystemFacade {
    pub(crate) const fn target() -> Self {
        Self::Target(&BuildTargetFilesystem)
    }

    #[cfg(test)]
    pub(crate) fn from_mock(mock: MockFilesystem) -> Self {
        Self::Mock(Arc::new(mock))
    }
}

impl Filesystem for FilesystemFacade {
    fn cpuinfo_contents(&self) -> Option<Vec<u8>> {
        match self {
            Self::Target(filesystem) => filesystem.cpuinfo_contents(),
            #[cfg(test)]
            Self::Mock(mock) => mock.cpuinfo_contents(),
        }
    }

    fn auxv_contents(&self) -> Option<Vec<u8>> {
        match self {
            Self::Target(filesystem) => filesystem.auxv_contents(),
            #[cfg(test)]
            Self::Mock(mock) => mock.auxv_contents(),
        }
    }

    fn present_processors_contents(&self) -> Option<String> {
        match self {
            Self::Target(filesystem) => filesystem.present_processors_contents(),
            #[cfg(test)]
            Self::Mock(mock) => mock.present_processors_contents(),
        }
    }

    fn possible_processors_contents(&self) -> Option<String> {
        match self {
            Self::Target(filesystem) => filesystem.possible_processors_contents(),
            #[cfg(test)]
            Self::Mock(mock) => mock.possible_processors_contents(),
        }
    }
}

impl Debug for FilesystemFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Target(inner) => inner.fmt(f),
            #[cfg(test)]
            Self::Mock(inner) => inner.fmt(f),
        }
    }
}
