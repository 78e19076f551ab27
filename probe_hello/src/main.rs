//! Hello world UEFI application.
//!
//! Clears the firmware console and prints a greeting. Logs go to COM1.

#![cfg_attr(target_os = "uefi", no_std, no_main)]

#[cfg(target_os = "uefi")]
mod efi {
    use core::{arch::asm, panic::PanicInfo};
    use log::LevelFilter;
    use uefi::prelude::*;

    use probe_common::{app, target::current::firmware::FirmwareInfo, util::logger};

    #[panic_handler]
    fn panic_handler(info: &PanicInfo) -> ! {
        if let Some(location) = info.location() {
            log::error!("HELLO PANIC at {location}:");
        }
        log::error!("{}", info.message());
        loop {
            unsafe { asm!("hlt"); }
        }
    }

    #[entry]
    fn main(_image_handle: Handle, mut system_table: SystemTable<Boot>) -> Status {
        #[cfg(not(feature = "log-trace"))]
        logger::init_serial(0, LevelFilter::Info);
        #[cfg(feature = "log-trace")]
        logger::init_serial(0, LevelFilter::Trace);

        log::info!("probe_hello started on {}", FirmwareInfo::read(&system_table));

        match app::hello::run(system_table.stdout()) {
            Ok(()) => Status::SUCCESS,
            Err(error) => {
                log::error!("console output failed: {error:?}");
                error.into()
            },
        }
    }
}

#[cfg(not(target_os = "uefi"))]
fn main() {
    eprintln!("probe_hello is a UEFI application, build it for x86_64-unknown-uefi");
}
