//! GOP mode listing UEFI application.
//!
//! Locates the Graphics Output Protocol and prints the index and resolution of
//! every display mode it supports. Logs go to COM1.

#![cfg_attr(target_os = "uefi", no_std, no_main)]

#[cfg(target_os = "uefi")]
mod efi {
    use core::{arch::asm, panic::PanicInfo};
    use log::LevelFilter;
    use uefi::prelude::*;

    use probe_common::app;
    use probe_common::target::current::{
        firmware::FirmwareInfo,
        video::*,
    };
    use probe_common::util::logger;

    #[panic_handler]
    fn panic_handler(info: &PanicInfo) -> ! {
        if let Some(location) = info.location() {
            log::error!("MODES PANIC at {location}:");
        }
        log::error!("{}", info.message());
        loop {
            unsafe { asm!("hlt"); }
        }
    }

    #[cfg(feature = "self-test")]
    fn self_test(console_table: &mut SystemTable<Boot>, modes: Option<&GopModes<'_>>) {
        use probe_common::tests::{run_all, TestEnv};

        run_all(&mut TestEnv {
            console: console_table.stdout(),
            modes: modes.map(|m| m as &dyn IfModeSource),
        });
    }

    #[entry]
    fn main(_image_handle: Handle, system_table: SystemTable<Boot>) -> Status {
        #[cfg(not(feature = "log-trace"))]
        logger::init_serial(0, LevelFilter::Info);
        #[cfg(feature = "log-trace")]
        logger::init_serial(0, LevelFilter::Trace);

        log::info!("probe_modes started on {}", FirmwareInfo::read(&system_table));

        // The GOP stays open while the modes are printed, borrowing the boot
        // services for that whole time, and the console needs the table
        // mutably.
        // SAFETY: boot services are never exited by this application
        let mut console_table = unsafe { system_table.unsafe_clone() };

        let modes = GopModes::probe(system_table.boot_services());

        #[cfg(feature = "self-test")]
        self_test(&mut console_table, modes.as_ref().ok());

        let result = match &modes {
            Ok(modes) => {
                log::info!("listing {} modes", modes.mode_count());
                app::modes::run(console_table.stdout(), modes)
            },
            Err(error) => {
                log::error!("failed to probe GOP: {error:?}");
                if let Err(error) = app::modes::report_missing_gop(console_table.stdout()) {
                    log::error!("console output failed: {error:?}");
                }
                return (*error).into();
            },
        };

        match result {
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
    eprintln!("probe_modes is a UEFI application, build it for x86_64-unknown-uefi");
}
