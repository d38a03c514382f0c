use std::io::{self, Write};

use crate::color::Rgb;

/// Draws the strip as a single line of true-color blocks, redrawn in place.
pub struct TerminalOutput<W> {
    out: W,
    buffer: String,
}

impl<W: Write> TerminalOutput<W> {
    pub fn new(out: W) -> Self {
        TerminalOutput {
            out,
            buffer: String::new(),
        }
    }

    pub fn show(&mut self, pixels: &[Rgb]) -> io::Result<()> {
        self.buffer.clear();
        self.buffer.push('\r');
        for pixel in pixels {
            self.buffer.push_str(&format!(
                "\x1b[38;2;{};{};{}m\u{2588}",
                pixel.red, pixel.green, pixel.blue
            ));
        }
        self.buffer.push_str("\x1b[0m");

        self.out.write_all(self.buffer.as_bytes())?;
        self.out.flush()
    }

    pub fn finish(&mut self) -> io::Result<()> {
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_block_per_pixel() {
        let mut output = TerminalOutput::new(Vec::new());
        output.show(&[Rgb::new(255, 0, 0), Rgb::new(0, 0, 0)]).unwrap();

        let text = String::from_utf8(output.out.clone()).unwrap();
        assert_eq!(
            text,
            "\r\x1b[38;2;255;0;0m\u{2588}\x1b[38;2;0;0;0m\u{2588}\x1b[0m"
        );
    }

    #[test]
    fn frames_overwrite_each_other() {
        let mut output = TerminalOutput::new(Vec::new());
        output.show(&[Rgb::new(1, 2, 3)]).unwrap();
        output.show(&[Rgb::new(4, 5, 6)]).unwrap();
        output.finish().unwrap();

        let text = String::from_utf8(output.out).unwrap();
        assert_eq!(text.matches('\r').count(), 2);
        assert!(text.ends_with("\x1b[0m\n"));
    }
}
