use std::path::Path;

use tracing::debug;

use crate::pal::{readers, Filesystem};

const CPUINFO: &str = "/proc/cpuinfo";
const AUXV: &str = "/proc/self/auxv";
const PRESENT_PROCESSORS: &str = "/sys/devices/system/cpu/present";
const POSSIBLE_PROCESSORS: &str = "/sys/devices/system/cpu/possible";

/// Processor range lists are one short line; a fixed read bound is plenty for
/// the 32 indexes a mask can hold.
const RANGE_LIST_READ_LIMIT: usize = 64;

/// The virtual filesystem of the real operating system that the build is
/// targeting.
///
/// You would only use a different filesystem in unit tests that need to mock
/// the capability sources. Even then, whenever possible, tests should use the
/// real filesystem for maximum realism.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetFilesystem;

impl Filesystem for BuildTargetFilesystem {
    fn cpuinfo_contents(&self) -> Option<Vec<u8>> {
        match readers::read_whole(Path::new(CPUINFO)) {
            Ok(contents) => Some(contents),
            Err(error) => {
                debug!(%error, "capability listing is unavailable");
                None
            }
        }
    }

    fn auxv_contents(&self) -> Option<Vec<u8>> {
        match readers::read_whole(Path::new(AUXV)) {
            Ok(contents) => Some(contents),
            Err(error) => {
                debug!(%error, "auxiliary vector is unavailable");
                None
            }
        }
    }

    fn present_processors_contents(&self) -> Option<String> {
        read_range_list(PRESENT_PROCESSORS)
    }

    fn possible_processors_contents(&self) -> Option<String> {
        read_range_list(POSSIBLE_PROCESSORS)
    }
}

fn read_range_list(path: &str) -> Option<String> {
    let mut buffer = [0_u8; RANGE_LIST_READ_LIMIT];

    match readers::read_into(Path::new(path), &mut buffer) {
        Ok(len) => {
            let contents = buffer
                .get(..len)
                .expect("read_into never reports more than the buffer length");

            Some(String::from_utf8_lossy(contents).into_owned())
        }
        Err(error) => {
            debug!(path, %error, "processor range list is unavailable");
            None
        }
    }
}
