use crate::utils::error::Result;

/// Line-oriented destination for display and print output.
pub trait OutputSink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

impl<T: OutputSink + ?Sized> OutputSink for &mut T {
    fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line)
    }
}
