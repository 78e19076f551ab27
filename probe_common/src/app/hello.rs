use crate::target::interface::console::{Console, Result};

pub const GREETING: &str = "Hello World!\r\n";

/// Clears the console and greets the world
pub fn run(mut console: impl Console) -> Result<()> {
    console.reset()?;
    console.print(GREETING)
}
