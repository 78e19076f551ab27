//! Implements display mode enumeration using the UEFI GOP (Graphics Output
//! Protocol)

use arrayvec::ArrayVec;
use uefi::{
    proto::console::gop::{GraphicsOutput, ModeInfo as UefiModeInfo},
    table::boot::{BootServices, OpenProtocolAttributes, OpenProtocolParams, ScopedProtocol},
};
pub use crate::target::interface::video::{
    Error,
    Result,
    Resolution,
    ModeInfo,
    ModeSource as IfModeSource,
};

/// Number of modes whose parameters are cached while probing. Modes past
/// this are queried from the adapter on demand.
pub const MAX_MODES: usize = 64;

impl From<uefi::Error> for Error {
    fn from(value: uefi::Error) -> Self {
        Error::Device(value.status().0)
    }
}

/// Parameters of the first [`MAX_MODES`] modes plus the total mode count
#[derive(Debug, Clone, Default)]
struct ModeCache {
    modes: ArrayVec<ModeInfo, MAX_MODES>,
    total: u32,
}

impl ModeCache {
    fn record(&mut self, mode: ModeInfo) {
        self.total += 1;
        if !self.modes.is_full() {
            self.modes.push(mode);
        }
    }

    /// Looks a mode up in the cache, falling back to `fetch` for valid
    /// indices that didn't fit
    fn lookup(&self, index: u32, fetch: impl FnOnce(u32) -> Result<ModeInfo>) -> Result<ModeInfo> {
        if index >= self.total {
            return Err(Error::NoSuchMode(index));
        }
        match self.modes.get(index as usize) {
            Some(mode) => Ok(*mode),
            None => fetch(index),
        }
    }
}

fn to_mode_info(index: u32, info: &UefiModeInfo) -> ModeInfo {
    ModeInfo {
        index,
        resolution: info.resolution().into(),
        stride: info.stride(),
    }
}

fn same_mode(a: &UefiModeInfo, b: &UefiModeInfo) -> bool {
    a.resolution() == b.resolution()
        && a.stride() == b.stride()
        && a.pixel_format() == b.pixel_format()
}

/// Modes supported by the graphics adapter.
///
/// Keeps the protocol open for as long as it lives, so that every mode the
/// firmware reports can be queried.
pub struct GopModes<'b> {
    gop: ScopedProtocol<'b, GraphicsOutput>,
    boot_services: &'b BootServices,
    cache: ModeCache,
    current: Option<u32>,
}

impl<'b> GopModes<'b> {
    pub fn probe(boot_services: &'b BootServices) -> Result<GopModes<'b>> {
        let gop_handle = boot_services
            .get_handle_for_protocol::<GraphicsOutput>()
            .map_err(|_| Error::NotSupported)?;

        // SAFETY: the protocol is only read from. Opening it exclusively would
        // disconnect the firmware console from the adapter.
        let gop = unsafe {
            boot_services.open_protocol::<GraphicsOutput>(
                OpenProtocolParams {
                    handle: gop_handle,
                    agent: boot_services.image_handle(),
                    controller: None,
                },
                OpenProtocolAttributes::GetProtocol,
            )?
        };

        let current_info = gop.current_mode_info();
        let mut current = None;
        let mut cache = ModeCache::default();

        for (index, mode) in gop.modes(boot_services).enumerate() {
            let index = index as u32;
            let info = mode.info();
            log::trace!("mode {index}: {:?} {:?}", info.resolution(), info.pixel_format());

            if current.is_none() && same_mode(info, &current_info) {
                current = Some(index);
            }
            cache.record(to_mode_info(index, info));
        }

        log::debug!("{} modes ({} cached), current: {current:?}", cache.total, cache.modes.len());
        Ok(GopModes { gop, boot_services, cache, current })
    }
}

impl IfModeSource for GopModes<'_> {
    fn mode_count(&self) -> u32 {
        self.cache.total
    }

    fn query_mode(&self, index: u32) -> Result<ModeInfo> {
        self.cache.lookup(index, |index| {
            let mode = self.gop
                .modes(self.boot_services)
                .nth(index as usize)
                .ok_or(Error::NoSuchMode(index))?;
            Ok(to_mode_info(index, mode.info()))
        })
    }

    fn current_mode(&self) -> Option<u32> {
        self.current
    }
}

impl From<Error> for uefi::Status {
    fn from(value: Error) -> Self {
        match value {
            Error::NotSupported => uefi::Status::NOT_FOUND,
            Error::NoSuchMode(_) => uefi::Status::INVALID_PARAMETER,
            Error::Device(status) => uefi::Status(status),
        }
    }
}
