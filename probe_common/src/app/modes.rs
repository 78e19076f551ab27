//! Lists the display modes of the graphics adapter

use crate::target::interface::{
    console::{Console, Result, FORMAT_ERROR_PLACEHOLDER},
    video::ModeSource,
};

/// Prints a header with the mode count, then one line per mode:
/// ```text
/// GOP modes: 2
/// Mode 0: 640x480
/// Mode 1: 800x600 (current)
/// ```
/// A mode that can't be queried is listed as `Mode <index>: <error>`.
pub fn run(mut console: impl Console, modes: &impl ModeSource) -> Result<()> {
    let count = modes.mode_count();
    let current = modes.current_mode();

    console.print("GOP modes: ")?;
    console.print_int(count.into())?;
    console.print("\r\n")?;

    for index in 0..count {
        console.print("Mode ")?;
        console.print_int(index.into())?;
        console.print(": ")?;

        match modes.query_mode(index) {
            Ok(mode) => {
                print_dimension(&mut console, mode.resolution.width)?;
                console.print("x")?;
                print_dimension(&mut console, mode.resolution.height)?;
                if current == Some(index) {
                    console.print(" (current)")?;
                }
            },
            Err(error) => {
                log::warn!("failed to query mode {index}: {error:?}");
                console.print(FORMAT_ERROR_PLACEHOLDER)?;
            },
        }

        console.print("\r\n")?;
    }

    Ok(())
}

/// Reports that there's no graphics adapter to enumerate
pub fn report_missing_gop(mut console: impl Console) -> Result<()> {
    console.print("Unable to locate GOP\r\n")
}

fn print_dimension(console: &mut impl Console, value: usize) -> Result<()> {
    match i64::try_from(value) {
        Ok(value) => console.print_int(value),
        Err(_) => console.print(FORMAT_ERROR_PLACEHOLDER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::interface::{
        console::{tests::RecordingConsole, Error},
        video::tests::FixedModes,
    };

    #[test]
    fn lists_modes() {
        let modes = FixedModes {
            modes: vec![Some((640, 480)), Some((800, 600)), Some((1920, 1080))],
            current: Some(1),
        };
        let mut console = RecordingConsole::default();
        run(&mut console, &modes).unwrap();
        assert_eq!(console.text, concat!(
            "GOP modes: 3\r\n",
            "Mode 0: 640x480\r\n",
            "Mode 1: 800x600 (current)\r\n",
            "Mode 2: 1920x1080\r\n",
        ));
    }

    #[test]
    fn lists_every_mode_of_large_adapters() {
        let modes = FixedModes {
            modes: (0..80).map(|i| Some((640 + i, 480))).collect(),
            current: Some(79),
        };
        let mut console = RecordingConsole::default();
        run(&mut console, &modes).unwrap();

        let lines: Vec<&str> = console.text.split_terminator("\r\n").collect();
        assert_eq!(lines.len(), 81);
        assert_eq!(lines[0], "GOP modes: 80");
        assert_eq!(lines[65], "Mode 64: 704x480");
        assert_eq!(lines[80], "Mode 79: 719x480 (current)");
    }

    #[test]
    fn no_modes() {
        let modes = FixedModes { modes: vec![], current: None };
        let mut console = RecordingConsole::default();
        run(&mut console, &modes).unwrap();
        assert_eq!(console.text, "GOP modes: 0\r\n");
    }

    #[test]
    fn failed_query() {
        let modes = FixedModes { modes: vec![None, Some((1024, 768))], current: None };
        let mut console = RecordingConsole::default();
        run(&mut console, &modes).unwrap();
        assert_eq!(console.text, "GOP modes: 2\r\nMode 0: <error>\r\nMode 1: 1024x768\r\n");
    }

    #[test]
    fn oversized_dimension() {
        let mut console = RecordingConsole::default();
        print_dimension(&mut console, usize::MAX).unwrap();
        assert_eq!(console.text, "<error>");
    }

    #[test]
    fn missing_gop() {
        let mut console = RecordingConsole::default();
        report_missing_gop(&mut console).unwrap();
        assert_eq!(console.text, "Unable to locate GOP\r\n");
    }

    #[test]
    fn console_failure_stops_listing() {
        let modes = FixedModes { modes: vec![Some((640, 480))], current: None };
        let mut console = RecordingConsole { fail_with: Some(5), ..Default::default() };
        assert_eq!(run(&mut console, &modes), Err(Error::Device(5)));
    }
}
