use std::io::{self, Write};

/// Something that can speak. Callers hold a `&dyn Speaker` and never look at
/// the concrete type behind it.
pub trait Speaker: Send + Sync {
    /// The fixed line this speaker says.
    fn utterance(&self) -> &'static str;

    /// Writes the utterance followed by a newline to `out`.
    fn speak_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.utterance())
    }

    /// Writes the utterance to standard output.
    fn speak(&self) -> io::Result<()> {
        self.speak_to(&mut io::stdout().lock())
    }
}
